//! Slider input handling
//!
//! The range slider is the only input device: a single integer in [0, 100]
//! mapped linearly onto the player paddle's horizontal travel. Clamping
//! happens here so the simulation core never has to reclamp.

use game_core::Config;

/// Default slider position (paddle centered)
pub const SLIDER_CENTER: f32 = 50.0;

/// Clamp a raw slider value to the widget's [0, 100] range
pub fn clamp_slider(value: f32) -> f32 {
    value.clamp(0.0, 100.0)
}

/// Map a slider value to the player paddle's target X (left edge)
pub fn slider_target(config: &Config, value: f32) -> f32 {
    config.slider_to_x(clamp_slider(value))
}
