//! Dynamic difficulty: pure functions of the scores and the rally clock.

use crate::{Config, Params};

/// Difficulty knobs for the current tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    /// Ball speed in pixels per tick, before the in-round multiplier
    pub ball_speed: f32,
    /// Opponent paddle speed in pixels per tick
    pub opponent_speed: f32,
    /// Dead-band half-width in pixels; larger means a slower-reacting opponent
    pub reaction: f32,
}

/// Compute difficulty from the cumulative scores.
///
/// Ball and opponent speeds ramp with the total score; the opponent ramps
/// faster per point so it stays competitive as the ball accelerates. The
/// reaction threshold shrinks with the player's score only, so opponent
/// skill tracks player success rather than its own points.
pub fn compute(player_score: u32, opponent_score: u32, config: &Config) -> Difficulty {
    let total = (player_score + opponent_score) as f32;

    let ball_speed =
        (config.ball_speed_base * (1.0 + config.ball_speed_ramp * total)).min(config.ball_speed_max);

    let opponent_speed = (config.opponent_speed_base
        * (1.0 + config.opponent_speed_ramp * total))
        .min(config.opponent_speed_max);

    let reaction = (config.reaction_base * (1.0 - config.reaction_drop * player_score as f32))
        .max(config.reaction_min);

    Difficulty {
        ball_speed,
        opponent_speed,
        reaction,
    }
}

/// In-round speed multiplier: 1.0 at the start of a rally, stepping up by
/// `ROUND_RAMP_STEP` every `ROUND_RAMP_INTERVAL_MS`, capped at
/// `ROUND_RAMP_MAX`.
pub fn round_multiplier(round_start_ms: f64, now_ms: f64) -> f32 {
    let elapsed = (now_ms - round_start_ms).max(0.0);
    let intervals = (elapsed / Params::ROUND_RAMP_INTERVAL_MS).floor() as f32;
    (1.0 + Params::ROUND_RAMP_STEP * intervals).min(Params::ROUND_RAMP_MAX)
}
