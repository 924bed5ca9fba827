use cgmath::InnerSpace;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sim::arena::Arena;
use sim::config::GameConfig;
use sim::constants::{BRICKS_PER_ROW, BRICK_ROWS};
use sim::simulation::step;
use sim::world_data::{InputSnapshot, World};

#[test]
fn new_world_matches_config() {
    let arena = Arena::new(1200.0, 800.0);
    let config = GameConfig::default();
    let mut rng = StdRng::seed_from_u64(7);

    let world = World::new(arena, &config, &mut rng);

    assert_eq!(world.balls.len(), config.ball_count);
    assert_eq!(world.bricks.len(), BRICKS_PER_ROW * BRICK_ROWS);
    assert!(world.bricks.iter().all(|brick| brick.alive));

    let radius = arena.ball_radius;
    for ball in &world.balls {
        assert!(ball.position.x >= 3.0 * radius);
        assert!(ball.position.x <= arena.width - 3.0 * radius);
        assert!(ball.position.y >= arena.paddle_line + 3.0 * radius);
        assert!(ball.position.y <= arena.height - 3.0 * radius);
        assert!((ball.velocity.magnitude2() - 1.0).abs() < 1e-5);
        assert!(ball.color.0 >= 80 && ball.color.1 >= 80 && ball.color.2 >= 80);
        assert_eq!(ball.cooldown, 0.0);
    }
}

#[test]
fn invariants_hold_over_a_long_run() {
    let arena = Arena::new(1200.0, 800.0);
    let config = GameConfig::default();
    let mut rng = StdRng::seed_from_u64(42);

    let mut world = World::new(arena, &config, &mut rng);
    let mut previous_count = world.balls.len();
    let mut seen_dead = vec![false; world.bricks.len()];

    for frame in 0..5000_u32 {
        let input = InputSnapshot {
            move_left: frame % 3 == 0,
            move_right: frame % 5 == 0,
        };

        step(&mut world, &input, 1.67);

        // balls are only ever removed
        assert!(world.balls.len() <= previous_count);
        previous_count = world.balls.len();

        for ball in &world.balls {
            assert!(ball.cooldown >= 0.0);
            assert!(
                (ball.velocity.magnitude2() - 1.0).abs() < 1e-3,
                "ball speed drifted at frame {}",
                frame
            );
        }

        for (index, brick) in world.bricks.iter().enumerate() {
            if seen_dead[index] {
                assert!(!brick.alive, "brick {} came back at frame {}", index, frame);
            }
            if !brick.alive {
                seen_dead[index] = true;
            }
        }
    }
}

#[test]
fn world_without_balls_stays_terminal() {
    let arena = Arena::new(1200.0, 800.0);
    let config = GameConfig {
        ball_count: 0,
        ..GameConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(7);

    let mut world = World::new(arena, &config, &mut rng);
    assert!(world.is_game_over());

    for _ in 0..100 {
        step(&mut world, &InputSnapshot::default(), 1.67);
        assert!(world.is_game_over());
        assert!(world.bricks.iter().all(|brick| brick.alive));
    }
}
