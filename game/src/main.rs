use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use raylib::color::Color;
use raylib::consts::KeyboardKey;
use raylib::drawing::RaylibDraw;
use raylib::init;
use sim::arena::Arena;
use sim::config::GameConfig;
use sim::constants::ANIMATION_SPEED_SCALE;
use sim::simulation::step;
use sim::world_data::{InputSnapshot, World};
use std::fs;
use std::path::PathBuf;
use tracing::info_span;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Keyboard-driven brick breaker", long_about = None)]
struct Args {
    /// TOML config file; missing fields fall back to defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of balls spawned at start
    #[arg(long)]
    balls: Option<usize>,

    /// Ball speed factor, also adjustable in game with Up/Down
    #[arg(long)]
    ball_speed: Option<f32>,

    /// Scales the whole simulation clock
    #[arg(long)]
    animation_speed: Option<f32>,

    /// Window width in pixels
    #[arg(long)]
    width: Option<i32>,

    /// Window height in pixels
    #[arg(long)]
    height: Option<i32>,
}

fn main() -> Result<()> {
    init_logging();

    let args = Args::parse();
    let config = load_config(&args)?;

    run_game(config);

    Ok(())
}

fn init_logging() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_target(true)
        .with_level(true)
        .with_env_filter(env_filter)
        .init();
}

fn load_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("read config {}", path.display()))?;
            toml::from_str(&text).with_context(|| format!("parse config {}", path.display()))?
        }
        None => GameConfig::default(),
    };

    if let Some(balls) = args.balls {
        config.ball_count = balls;
    }
    if let Some(speed) = args.ball_speed {
        config.ball_speed = speed;
    }
    if let Some(speed) = args.animation_speed {
        config.animation_speed = speed;
    }
    if let Some(width) = args.width {
        config.window_width = width;
    }
    if let Some(height) = args.height {
        config.window_height = height;
    }

    Ok(config)
}

fn run_game(config: GameConfig) {
    let (mut handle, thread) = init()
        .size(config.window_width, config.window_height)
        .title("Brick Breaker")
        .vsync()
        .build();

    let arena = Arena::new(config.window_width as f32, config.window_height as f32);
    let mut rng = rand::thread_rng();
    let mut world = World::new(arena, &config, &mut rng);

    info!(
        "arena {}x{}, {} balls, speed {}",
        config.window_width,
        config.window_height,
        world.balls.len(),
        world.ball_speed
    );

    let _span = info_span!("game_loop").entered();
    let mut game_over_reported = false;

    while !handle.window_should_close() {
        let delta = ANIMATION_SPEED_SCALE * config.animation_speed * handle.get_frame_time();

        let input = InputSnapshot {
            move_left: handle.is_key_down(KeyboardKey::KEY_LEFT),
            move_right: handle.is_key_down(KeyboardKey::KEY_RIGHT),
        };

        if handle.is_key_pressed(KeyboardKey::KEY_UP) {
            world.ball_speed += 0.5;
            info!("ball speed {}", world.ball_speed);
        }

        if handle.is_key_pressed(KeyboardKey::KEY_DOWN) {
            world.ball_speed = (world.ball_speed - 0.5).max(0.5);
            info!("ball speed {}", world.ball_speed);
        }

        step(&mut world, &input, delta);

        if world.is_game_over() && !game_over_reported {
            info!("all balls lost");
            game_over_reported = true;
        }

        let mut draw_handle = handle.begin_drawing(&thread);

        draw_handle.clear_background(Color::from_hex("FFF4EA").unwrap());

        // the world uses a bottom-left origin with y up, so every draw call
        // flips y against the arena height
        let height = world.arena.height;

        draw_handle.draw_rectangle(
            0,
            (height - world.arena.paddle_line) as i32,
            world.arena.width as i32,
            world.arena.paddle_line as i32,
            Color::from_hex("C96868").unwrap(),
        );

        for brick in world.bricks.iter().filter(|brick| brick.alive) {
            let x = brick.position.x as i32;
            let y = (height - brick.position.y - world.arena.brick_height) as i32;

            draw_handle.draw_rectangle(
                x,
                y,
                world.arena.brick_width as i32,
                world.arena.brick_height as i32,
                Color::from_hex("7EACB5").unwrap(),
            );

            draw_handle.draw_rectangle_lines(
                x,
                y,
                world.arena.brick_width as i32,
                world.arena.brick_height as i32,
                Color::from_hex("FFF4EA").unwrap(),
            );
        }

        for ball in &world.balls {
            let (red, green, blue) = ball.color;

            draw_handle.draw_circle(
                ball.position.x as i32,
                (height - ball.position.y) as i32,
                world.arena.ball_radius,
                Color::new(red, green, blue, 255),
            );
        }

        draw_handle.draw_rectangle(
            world.paddle.position as i32,
            (height - world.arena.paddle_line - world.arena.paddle_height / 2.0) as i32,
            world.arena.paddle_width as i32,
            world.arena.paddle_height as i32,
            Color::from_hex("6A9C89").unwrap(),
        );

        let label = if world.is_game_over() {
            "Game Over".to_string()
        } else {
            format!("Balls: {}", world.balls.len())
        };

        draw_handle.draw_text(&label, 10, 10, 20, Color::from_hex("3B3030").unwrap());
    }
}
