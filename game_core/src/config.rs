use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub court_width: f32,
    pub court_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub player_paddle_y: f32,
    pub opponent_paddle_y: f32,
    pub ball_radius: f32,
    pub ball_speed_base: f32,
    pub ball_speed_max: f32,
    pub ball_speed_ramp: f32,
    pub opponent_speed_base: f32,
    pub opponent_speed_max: f32,
    pub opponent_speed_ramp: f32,
    pub reaction_base: f32,
    pub reaction_min: f32,
    pub reaction_drop: f32,
    pub reaction_jitter: f32,
    pub hit_angle_factor: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            court_width: Params::COURT_WIDTH,
            court_height: Params::COURT_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            player_paddle_y: Params::PLAYER_PADDLE_Y,
            opponent_paddle_y: Params::OPPONENT_PADDLE_Y,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_base: Params::BALL_SPEED_BASE,
            ball_speed_max: Params::BALL_SPEED_MAX,
            ball_speed_ramp: Params::BALL_SPEED_RAMP,
            opponent_speed_base: Params::OPPONENT_SPEED_BASE,
            opponent_speed_max: Params::OPPONENT_SPEED_MAX,
            opponent_speed_ramp: Params::OPPONENT_SPEED_RAMP,
            reaction_base: Params::REACTION_BASE,
            reaction_min: Params::REACTION_MIN,
            reaction_drop: Params::REACTION_DROP,
            reaction_jitter: Params::REACTION_JITTER,
            hit_angle_factor: Params::HIT_ANGLE_FACTOR,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Centered default X (left edge) for either paddle
    pub fn paddle_default_x(&self) -> f32 {
        (self.court_width - self.paddle_width) / 2.0
    }

    /// Clamp a paddle X (left edge) to the court
    pub fn clamp_paddle_x(&self, x: f32) -> f32 {
        x.clamp(0.0, self.court_width - self.paddle_width)
    }

    /// Court center, where the ball spawns
    pub fn court_center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.court_width / 2.0, self.court_height / 2.0)
    }

    /// Map a slider value in [0, 100] to a paddle X (left edge)
    pub fn slider_to_x(&self, value: f32) -> f32 {
        (value / 100.0) * (self.court_width - self.paddle_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_default_x_is_centered() {
        let config = Config::new();
        assert_eq!(config.paddle_default_x(), 125.0, "Paddle centers at 125");
    }

    #[test]
    fn test_clamp_paddle_x() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_x(-10.0), 0.0);
        assert_eq!(
            config.clamp_paddle_x(1000.0),
            config.court_width - config.paddle_width
        );
        assert_eq!(config.clamp_paddle_x(100.0), 100.0);
    }

    #[test]
    fn test_slider_to_x_range() {
        let config = Config::new();
        assert_eq!(config.slider_to_x(0.0), 0.0);
        assert_eq!(
            config.slider_to_x(100.0),
            config.court_width - config.paddle_width
        );
        assert_eq!(config.slider_to_x(50.0), config.paddle_default_x());
    }

    #[test]
    fn test_court_center() {
        let config = Config::new();
        assert_eq!(config.court_center(), glam::Vec2::new(150.0, 250.0));
    }
}
