use glam::Vec2;

use crate::Config;

/// Which participant a paddle belongs to. Player guards the bottom edge,
/// opponent the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Opponent,
}

/// Paddle component. `x` is the left edge; `y` is fixed per side.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32) -> Self {
        Self { side, x, y }
    }

    pub fn center_x(&self, paddle_width: f32) -> f32 {
        self.x + paddle_width / 2.0
    }
}

/// Ball component - position and velocity in pixels (per tick)
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Rescale velocity to the given magnitude, preserving direction
    pub fn rescale(&mut self, target_speed: f32) {
        let speed = self.vel.length();
        if speed > 0.0 {
            self.vel *= target_speed / speed;
        }
    }

    /// Reset to court center serving toward `serve`. Horizontal direction
    /// sign is randomized; vertical sign points at the receiving side.
    pub fn reset(&mut self, config: &Config, speed: f32, serve: Side, rng: &mut crate::GameRng) {
        use rand::Rng;

        self.pos = config.court_center();

        let dx = if rng.0.gen_bool(0.5) { speed } else { -speed };
        let dy = match serve {
            Side::Player => speed,    // downward, toward the bottom paddle
            Side::Opponent => -speed, // upward, toward the top paddle
        };
        self.vel = Vec2::new(dx, dy);
    }
}
