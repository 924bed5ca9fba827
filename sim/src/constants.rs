pub const BRICKS_PER_ROW: usize = 10;
pub const BRICK_ROWS: usize = 15;

pub const PADDLE_SPEED: f32 = 12.0;

// paddle hit: how much of the incoming vx survives vs. how hard the
// hit offset across the paddle deflects the ball
pub const BALL_KEEP: f32 = 0.4;
pub const PADDLE_DEFLECT: f32 = 0.8;
pub const MAX_DEFLECT: f32 = 0.95;

pub const HIT_COOLDOWN: f32 = 6.0;

// converts frame time in seconds to the delta units the speeds above use
pub const ANIMATION_SPEED_SCALE: f32 = 100.0;
