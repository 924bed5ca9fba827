use serde::Deserialize;

/// Startup tuning. Loadable from a TOML file with any subset of the fields;
/// the rest fall back to the defaults below.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window_width: i32,
    pub window_height: i32,
    pub ball_count: usize,
    pub ball_speed: f32,
    pub animation_speed: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            window_width: 1200,
            window_height: 800,
            ball_count: 10,
            ball_speed: 4.0,
            animation_speed: 1.0,
        }
    }
}
