use hecs::World;

use crate::{Ball, Config, Events, Paddle, Side};

/// Resolve ball collisions with the side walls and both paddles.
///
/// Walls reflect `dx` with no positional correction; the ball may briefly
/// overlap a wall before the next integration step carries it back out.
/// Paddle checks are gated on travel direction, so only the paddle the ball
/// is heading toward can bounce it. When a wall and a paddle both trigger in
/// the same tick, the wall reflection applies first and the paddle's
/// hit-position recomputation then overrides `dx`; that order is observable
/// in edge trajectories and is kept deliberately.
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect ball data without holding borrows
    let ball_data = {
        let mut ball_query = world.query::<&Ball>();
        ball_query
            .iter()
            .next()
            .map(|(_e, ball)| (ball.pos, ball.vel))
    };

    let (pos, mut vel) = match ball_data {
        Some(data) => data,
        None => return, // No ball in world
    };

    let r = config.ball_radius;

    // Side walls: perfect reflection, boundary contact is inclusive
    if pos.x - r <= 0.0 || pos.x + r >= config.court_width {
        vel.x = -vel.x;
        events.ball_hit_wall = true;
    }

    let paddles: Vec<Paddle> = world.query::<&Paddle>().iter().map(|(_e, p)| *p).collect();

    for paddle in paddles {
        // Only the paddle the ball is moving toward can deflect it
        let moving_toward = match paddle.side {
            Side::Player => vel.y > 0.0,
            Side::Opponent => vel.y < 0.0,
        };
        if !moving_toward {
            continue;
        }

        // Inclusive AABB overlap between ball square and paddle rectangle
        let overlap_x = pos.x + r >= paddle.x && pos.x - r <= paddle.x + config.paddle_width;
        let overlap_y = pos.y + r >= paddle.y && pos.y - r <= paddle.y + config.paddle_height;
        if !(overlap_x && overlap_y) {
            continue;
        }

        // Bounce angle follows the hit position: dead center sends the ball
        // straight back, edge hits produce sharper angles. Total speed is
        // conserved by deriving dy from the speed remaining after dx.
        let speed = vel.length();
        let hit = (pos.x - paddle.center_x(config.paddle_width)) / (config.paddle_width / 2.0);
        let dx = hit * speed * config.hit_angle_factor;
        let dy = (speed * speed - dx * dx).max(0.0).sqrt();

        vel.x = dx;
        vel.y = match paddle.side {
            Side::Player => -dy,  // away from the bottom paddle
            Side::Opponent => dy, // away from the top paddle
        };
        events.ball_hit_paddle = true;
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.vel = vel;
    }
}
