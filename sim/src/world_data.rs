use cgmath::Vector2;
use rand::Rng;

use crate::arena::Arena;
use crate::config::GameConfig;
use crate::constants::{BRICKS_PER_ROW, BRICK_ROWS};

#[derive(Debug, Clone)]
pub struct Ball {
    pub position: Vector2<f32>,
    /// Unit-length direction; the world-level ball speed scales it.
    pub velocity: Vector2<f32>,
    pub color: (u8, u8, u8),
    /// Frames remaining during which wall/paddle re-collision is suppressed.
    /// Never negative.
    pub cooldown: f32,
}

#[derive(Debug, Clone)]
pub struct Brick {
    /// Lower-left corner; width and height are shared arena constants.
    pub position: Vector2<f32>,
    pub alive: bool,
}

#[derive(Debug, Clone)]
pub struct Paddle {
    /// X of the left edge. The y-center is fixed at the arena's paddle line.
    pub position: f32,
}

/// Keyboard state sampled once per frame, before the physics step.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    pub move_left: bool,
    pub move_right: bool,
}

#[derive(Debug)]
pub struct World {
    pub arena: Arena,
    /// Live-adjustable speed factor applied to every ball.
    pub ball_speed: f32,
    pub balls: Vec<Ball>,
    pub bricks: Vec<Brick>,
    pub paddle: Paddle,
}

impl World {
    pub fn new(arena: Arena, config: &GameConfig, rng: &mut impl Rng) -> Self {
        let mut world = World {
            arena,
            ball_speed: config.ball_speed,
            balls: Vec::with_capacity(config.ball_count),
            bricks: create_bricks(&arena),
            paddle: Paddle {
                position: arena.width / 2.0 - arena.paddle_width / 2.0,
            },
        };

        for _ in 0..config.ball_count {
            world.spawn_ball(rng);
        }

        world
    }

    /// Adds one ball at a random spot inside the arena margins (clear of the
    /// paddle strip), heading in a random unit direction.
    pub fn spawn_ball(&mut self, rng: &mut impl Rng) {
        let radius = self.arena.ball_radius;
        let x = rng.gen_range(3.0 * radius..=self.arena.width - 3.0 * radius);
        let y = rng.gen_range(self.arena.paddle_line + 3.0 * radius..=self.arena.height - 3.0 * radius);

        let vx = rng.gen_range(-1.0f32..=1.0);
        let mut vy = (1.0 - vx * vx).sqrt();
        if rng.gen_bool(0.5) {
            vy = -vy;
        }

        self.balls.push(Ball {
            position: Vector2::new(x, y),
            velocity: Vector2::new(vx, vy),
            color: (
                rng.gen_range(80..=255),
                rng.gen_range(80..=255),
                rng.gen_range(80..=255),
            ),
            cooldown: 0.0,
        });
    }

    pub fn is_game_over(&self) -> bool {
        self.balls.is_empty()
    }
}

fn create_bricks(arena: &Arena) -> Vec<Brick> {
    let mut bricks = Vec::with_capacity(BRICKS_PER_ROW * BRICK_ROWS);

    for column in 0..BRICKS_PER_ROW {
        for row in 0..BRICK_ROWS {
            bricks.push(Brick {
                position: Vector2::new(
                    arena.brick_width * column as f32,
                    arena.height - 5.0 * arena.brick_height - arena.brick_height * row as f32,
                ),
                alive: true,
            });
        }
    }

    bricks
}
