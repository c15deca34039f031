use hecs::World;

use crate::{Ball, Config, Events, GameRng, MatchState, Paddle, Score, Side};

/// Check whether the ball left the court and resolve the point.
///
/// A top exit means the opponent failed to return and the player scores; a
/// bottom exit scores for the opponent. Exactly one side ever increments per
/// tick. There is no continuous-collision detection: however far past the
/// boundary the ball overshot in one tick, it still scores exactly once.
///
/// On a point: the ball respawns at court center serving toward the
/// conceding side at `serve_speed` per axis (horizontal sign randomized),
/// both paddles recenter, and the rally clock restarts so the in-round
/// multiplier drops back to 1.0.
#[allow(clippy::too_many_arguments)]
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    match_state: &mut MatchState,
    rng: &mut GameRng,
    now_ms: f64,
    serve_speed: f32,
) {
    let ball_y = {
        let mut ball_query = world.query::<&Ball>();
        match ball_query.iter().next() {
            Some((_e, ball)) => ball.pos.y,
            None => return,
        }
    };

    let r = config.ball_radius;
    let serve = if ball_y - r < 0.0 {
        score.increment_player();
        events.player_scored = true;
        Side::Opponent
    } else if ball_y + r > config.court_height {
        score.increment_opponent();
        events.opponent_scored = true;
        Side::Player
    } else {
        return;
    };

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(config, serve_speed, serve, rng);
    }
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.x = config.paddle_default_x();
    }
    match_state.reset_round(now_ms);
}
