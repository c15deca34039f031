use hecs::World;

use crate::{Ball, Paddle, Side};

/// Rescale the ball's velocity to this tick's target speed. Score- and
/// round-based acceleration is applied here as a ratio scaling, so the
/// travel direction never jumps.
pub fn rescale_ball(world: &mut World, target_speed: f32) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.rescale(target_speed);
    }
}

/// Advance the ball by one explicit Euler step. Velocity is in pixels per
/// tick; the tick itself is the time unit, so no delta-time appears here.
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

/// Set the player paddle directly to the externally supplied target X.
/// The input collaborator has already clamped it to the court.
pub fn apply_player_target(world: &mut World, target_x: f32) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Player {
            paddle.x = target_x;
        }
    }
}
