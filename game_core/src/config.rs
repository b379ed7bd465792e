use crate::{Params, Playfield, Side};

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_margin: f32,
    pub ball_radius: f32,
    pub ball_speed_increase: f32,
    pub ball_spin: f32,
    pub serve_delay: f32,
    pub serve_speed_x: f32,
    pub serve_spread_y: f32,
    pub opponent_gain: f32,
    pub win_score: u8,
    pub max_dt: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            ball_spin: Params::BALL_SPIN,
            serve_delay: Params::SERVE_DELAY,
            serve_speed_x: Params::SERVE_SPEED_X,
            serve_spread_y: Params::SERVE_SPREAD_Y,
            opponent_gain: Params::OPPONENT_GAIN,
            win_score: Params::WIN_SCORE,
            max_dt: Params::MAX_DT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the left edge X of a paddle for the given playfield
    pub fn paddle_x(&self, side: Side, field: &Playfield) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => field.width - self.paddle_width - self.paddle_margin,
        }
    }

    /// Top edge Y that vertically centres a paddle
    pub fn paddle_spawn_y(&self, field: &Playfield) -> f32 {
        field.height / 2.0 - self.paddle_height / 2.0
    }

    /// Clamp paddle top edge to playfield bounds
    pub fn clamp_paddle_y(&self, y: f32, field: &Playfield) -> f32 {
        field.clamp_top(y, self.paddle_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        let field = Playfield::new(600.0, 400.0);
        assert_eq!(config.paddle_x(Side::Left, &field), 10.0, "Left paddle X position");
        assert_eq!(
            config.paddle_x(Side::Right, &field),
            585.0,
            "Right paddle X position"
        );
    }

    #[test]
    fn test_config_paddle_x_follows_width() {
        let config = Config::new();
        let field = Playfield::new(320.0, 200.0);
        assert_eq!(config.paddle_x(Side::Right, &field), 305.0);
    }

    #[test]
    fn test_config_paddle_spawn_y() {
        let config = Config::new();
        let field = Playfield::new(600.0, 400.0);
        assert_eq!(config.paddle_spawn_y(&field), 175.0);
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        let field = Playfield::new(600.0, 400.0);
        assert_eq!(config.clamp_paddle_y(-20.0, &field), 0.0);
        assert_eq!(
            config.clamp_paddle_y(1000.0, &field),
            field.height - config.paddle_height
        );
        let valid_y = 120.0;
        assert_eq!(config.clamp_paddle_y(valid_y, &field), valid_y);
    }
}
