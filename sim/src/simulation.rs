use cgmath::Vector2;
use log::debug;

use crate::arena::Arena;
use crate::collision::{Edge, Rect};
use crate::constants::{BALL_KEEP, HIT_COOLDOWN, MAX_DEFLECT, PADDLE_DEFLECT, PADDLE_SPEED};
use crate::world_data::{Ball, InputSnapshot, Paddle, World};

/// Advances the whole world by one frame: brick collisions, then per-ball
/// paddle collision, integration and wall bounces, then removal of lost
/// balls, then paddle movement.
pub fn step(world: &mut World, input: &InputSnapshot, delta: f32) {
    resolve_brick_collisions(world);
    update_balls(world, delta);
    prune_lost_balls(world);
    move_paddle(world, input, delta);
}

fn resolve_brick_collisions(world: &mut World) {
    let radius = world.arena.ball_radius;
    let brick_width = world.arena.brick_width;
    let brick_height = world.arena.brick_height;

    for brick in world.bricks.iter_mut().filter(|brick| brick.alive) {
        let rect = Rect {
            x: brick.position.x,
            y: brick.position.y,
            width: brick_width,
            height: brick_height,
        };

        // first overlapping ball wins; the brick is gone for the rest of
        // the frame
        for ball in world.balls.iter_mut() {
            if let Some(contact) = rect.circle_contact(ball.position, radius) {
                brick.alive = false;

                if let Some(edge) = rect.struck_edge(contact) {
                    bounce_off_brick(ball, edge);
                }

                debug!("brick at ({}, {}) destroyed", rect.x, rect.y);
                break;
            }
        }
    }
}

fn bounce_off_brick(ball: &mut Ball, edge: Edge) {
    match edge {
        Edge::Bottom => ball.velocity.y = -ball.velocity.y.abs(),
        Edge::Top => ball.velocity.y = ball.velocity.y.abs(),
        Edge::Left => ball.velocity.x = -ball.velocity.x.abs(),
        Edge::Right => ball.velocity.x = ball.velocity.x.abs(),
    }
}

fn update_balls(world: &mut World, delta: f32) {
    let arena = world.arena;
    let speed = world.ball_speed;
    let paddle = paddle_rect(&arena, &world.paddle);

    for ball in world.balls.iter_mut() {
        resolve_paddle_collision(ball, &paddle, arena.ball_radius);

        ball.position += ball.velocity * speed * delta;

        if ball.cooldown == 0.0 {
            let radius = arena.ball_radius;

            if ball.position.x - radius <= 0.0 || ball.position.x + radius >= arena.width {
                ball.velocity.x = -ball.velocity.x;
                ball.cooldown = HIT_COOLDOWN;
            }

            if ball.position.y + radius >= arena.height || ball.position.y - radius <= 0.0 {
                ball.velocity.y = -ball.velocity.y;
                ball.cooldown = HIT_COOLDOWN;
            }
        }

        ball.cooldown = (ball.cooldown - delta).max(0.0);
    }
}

fn paddle_rect(arena: &Arena, paddle: &Paddle) -> Rect {
    Rect {
        x: paddle.position,
        y: arena.paddle_line - arena.paddle_height / 2.0,
        width: arena.paddle_width,
        height: arena.paddle_height,
    }
}

fn resolve_paddle_collision(ball: &mut Ball, paddle: &Rect, radius: f32) {
    if ball.cooldown != 0.0 {
        return;
    }

    let Some(contact) = paddle.circle_contact(ball.position, radius) else {
        return;
    };

    // only top-edge hits redirect; side and bottom contact is ignored
    if paddle.struck_edge(contact) != Some(Edge::Top) {
        return;
    }

    let offset = 2.0 * (ball.position.x - paddle.x) / paddle.width - 1.0;
    let vx = (BALL_KEEP * ball.velocity.x + PADDLE_DEFLECT * offset).clamp(-MAX_DEFLECT, MAX_DEFLECT);

    ball.velocity = Vector2::new(vx, (1.0 - vx * vx).sqrt());
    ball.cooldown = HIT_COOLDOWN;
}

fn prune_lost_balls(world: &mut World) {
    let radius = world.arena.ball_radius;
    let paddle_line = world.arena.paddle_line;
    let count_before = world.balls.len();

    world
        .balls
        .retain(|ball| ball.position.y + radius > paddle_line);

    if world.balls.len() < count_before {
        debug!("{} ball(s) lost", count_before - world.balls.len());
    }
}

fn move_paddle(world: &mut World, input: &InputSnapshot, delta: f32) {
    let arena = &world.arena;
    let paddle = &mut world.paddle;

    if input.move_left && paddle.position > arena.paddle_min_x() {
        paddle.position -= PADDLE_SPEED * delta;
    }

    if input.move_right && paddle.position < arena.paddle_max_x() {
        paddle.position += PADDLE_SPEED * delta;
    }
}
