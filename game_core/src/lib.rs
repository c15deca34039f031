pub mod components;
pub mod config;
pub mod difficulty;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use difficulty::Difficulty;
pub use params::*;
pub use resources::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Advance the simulation by one tick.
///
/// `now_ms` is the wall-clock timestamp of this display-refresh callback;
/// `player_target_x` is whatever the input collaborator last produced,
/// already clamped to the court. Identity when the match is not running —
/// never a panic.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    match_state: &mut MatchState,
    score: &mut Score,
    events: &mut Events,
    config: &Config,
    rng: &mut GameRng,
    now_ms: f64,
    player_target_x: f32,
) {
    if !match_state.running {
        return;
    }

    // Clear events at start of tick
    events.clear();

    // 1. Difficulty from scores, target speed from the rally clock
    let diff = difficulty::compute(score.player, score.opponent, config);
    let target_speed =
        diff.ball_speed * difficulty::round_multiplier(match_state.round_start_ms, now_ms);

    // 2. Apply acceleration as a ratio rescale, 3. integrate
    rescale_ball(world, target_speed);
    move_ball(world);

    // 4-5. Walls, then paddles
    check_collisions(world, config, events);

    // 6. Scoring and rally reset
    check_scoring(
        world,
        config,
        score,
        events,
        match_state,
        rng,
        now_ms,
        target_speed,
    );

    // 7. Opponent reacts to the post-collision ball
    drive_opponent(world, &diff, config, rng);

    // 8. Player paddle follows the external target
    apply_player_target(world, player_target_x);
}

/// Read-only view of the world for rendering collaborators
#[derive(Debug, Clone, Copy, Default)]
pub struct Snapshot {
    pub ball_pos: Vec2,
    pub ball_radius: f32,
    pub player_paddle: Vec2,
    pub opponent_paddle: Vec2,
    pub paddle_size: Vec2,
    pub player_score: u32,
    pub opponent_score: u32,
}

/// Assemble the frame snapshot consumed by renderers. Nothing a renderer
/// does with it can affect simulation state.
pub fn snapshot(world: &mut World, score: &Score, config: &Config) -> Snapshot {
    let mut snap = Snapshot {
        ball_radius: config.ball_radius,
        paddle_size: Vec2::new(config.paddle_width, config.paddle_height),
        player_score: score.player,
        opponent_score: score.opponent,
        ..Default::default()
    };

    for (_entity, ball) in world.query::<&Ball>().iter() {
        snap.ball_pos = ball.pos;
    }
    for (_entity, paddle) in world.query::<&Paddle>().iter() {
        match paddle.side {
            Side::Player => snap.player_paddle = Vec2::new(paddle.x, paddle.y),
            Side::Opponent => snap.opponent_paddle = Vec2::new(paddle.x, paddle.y),
        }
    }
    snap
}

/// Spawn the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}

/// Spawn a paddle entity at its side's default position
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    let y = match side {
        Side::Player => config.player_paddle_y,
        Side::Opponent => config.opponent_paddle_y,
    };
    world.spawn((Paddle::new(side, config.paddle_default_x(), y),))
}

/// Spawn the full court: ball plus both paddles, all at rest positions
pub fn create_court(world: &mut World, config: &Config) {
    create_ball(world, config.court_center(), Vec2::ZERO);
    create_paddle(world, Side::Player, config);
    create_paddle(world, Side::Opponent, config);
}

/// (Re)initialize and begin ticking: scores zeroed, ball centered with a
/// randomized serve, paddles centered, rally clock reset. Idempotent.
pub fn start_match(
    world: &mut World,
    match_state: &mut MatchState,
    score: &mut Score,
    config: &Config,
    rng: &mut GameRng,
    now_ms: f64,
) {
    use rand::Rng;

    *score = Score::new();

    let serve = if rng.0.gen_bool(0.5) {
        Side::Player
    } else {
        Side::Opponent
    };
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(config, config.ball_speed_base, serve, rng);
    }
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.x = config.paddle_default_x();
    }

    match_state.start(now_ms);
}

/// Halt ticking and clear the lifecycle flags. State freezes in place and
/// stays eligible for reinitialization by `start_match`. Idempotent.
pub fn stop_match(match_state: &mut MatchState) {
    match_state.stop();
}
