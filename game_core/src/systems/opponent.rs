use hecs::World;

use crate::{Ball, Config, Difficulty, GameRng, Paddle, Side};

/// Dead-band tracker: the opponent only reacts once the ball's X drifts
/// further from the paddle center than the (jittered) reaction threshold.
///
/// The jitter resamples every tick, up to 10% of the threshold, which keeps
/// a fixed-threshold opponent from being perfectly predictable. This is the
/// whole controller: current ball X in, new paddle X out. It never looks at
/// velocity or predicts an intercept; threshold and speed are the only
/// difficulty knobs. Swap this function to substitute another controller
/// without touching the step.
pub fn next_opponent_x(
    ball_x: f32,
    paddle_x: f32,
    speed: f32,
    reaction: f32,
    config: &Config,
    rng: &mut GameRng,
) -> f32 {
    use rand::Rng;

    let jitter = rng.0.gen_range(0.0..=reaction * config.reaction_jitter);
    let adjusted = reaction + jitter;
    let center = paddle_x + config.paddle_width / 2.0;

    if ball_x < center - adjusted {
        config.clamp_paddle_x(paddle_x - speed)
    } else if ball_x > center + adjusted {
        config.clamp_paddle_x(paddle_x + speed)
    } else {
        paddle_x
    }
}

/// Drive the opponent paddle from the post-collision ball state
pub fn drive_opponent(world: &mut World, difficulty: &Difficulty, config: &Config, rng: &mut GameRng) {
    let ball_x = {
        let mut ball_query = world.query::<&Ball>();
        match ball_query.iter().next() {
            Some((_e, ball)) => ball.pos.x,
            None => return,
        }
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Opponent {
            paddle.x = next_opponent_x(
                ball_x,
                paddle.x,
                difficulty.opponent_speed,
                difficulty.reaction,
                config,
                rng,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, difficulty, Config, GameRng};
    use glam::Vec2;

    #[test]
    fn test_holds_inside_dead_band() {
        let config = Config::new();
        let mut rng = GameRng::new(1);
        let paddle_x = 125.0; // center 150

        // Even with maximum jitter the threshold is at least the base value,
        // so a ball within it never provokes a move.
        let x = next_opponent_x(150.0 + 49.0, paddle_x, 1.5, 50.0, &config, &mut rng);
        assert_eq!(x, paddle_x, "Ball inside the dead band: hold position");
    }

    #[test]
    fn test_chases_ball_outside_dead_band() {
        let config = Config::new();
        let mut rng = GameRng::new(1);
        let paddle_x = 125.0;

        // 10% jitter caps the adjusted threshold at 55
        let right = next_opponent_x(150.0 + 60.0, paddle_x, 1.5, 50.0, &config, &mut rng);
        assert_eq!(right, paddle_x + 1.5, "Moves right by its speed");

        let left = next_opponent_x(150.0 - 60.0, paddle_x, 1.5, 50.0, &config, &mut rng);
        assert_eq!(left, paddle_x - 1.5, "Moves left by its speed");
    }

    #[test]
    fn test_clamped_to_court() {
        let config = Config::new();
        let mut rng = GameRng::new(1);

        let at_left = next_opponent_x(0.0, 0.5, 6.0, 15.0, &config, &mut rng);
        assert_eq!(at_left, 0.0, "Clamped at the left edge");

        let max_x = config.court_width - config.paddle_width;
        let at_right = next_opponent_x(config.court_width, max_x - 0.5, 6.0, 15.0, &config, &mut rng);
        assert_eq!(at_right, max_x, "Clamped at the right edge");
    }

    #[test]
    fn test_jitter_stays_within_ten_percent() {
        let config = Config::new();
        let mut rng = GameRng::new(99);
        let paddle_x = 125.0;
        let reaction = 50.0;

        // A ball beyond threshold + 10% always provokes a move; one inside
        // the unjittered threshold never does. Sample many ticks.
        for _ in 0..200 {
            let x = next_opponent_x(150.0 + 55.1, paddle_x, 1.5, reaction, &config, &mut rng);
            assert_eq!(x, paddle_x + 1.5);
            let x = next_opponent_x(150.0 + 49.9, paddle_x, 1.5, reaction, &config, &mut rng);
            assert_eq!(x, paddle_x);
        }
    }

    #[test]
    fn test_drive_opponent_moves_only_opponent() {
        let mut world = World::new();
        let config = Config::new();
        let mut rng = GameRng::new(5);
        create_paddle(&mut world, Side::Player, &config);
        create_paddle(&mut world, Side::Opponent, &config);
        create_ball(&mut world, Vec2::new(290.0, 100.0), Vec2::new(2.0, -2.0));

        let diff = difficulty::compute(0, 0, &config);
        drive_opponent(&mut world, &diff, &config, &mut rng);

        for (_e, paddle) in world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Opponent => assert_eq!(
                    paddle.x,
                    config.paddle_default_x() + diff.opponent_speed,
                    "Opponent chased the ball"
                ),
                Side::Player => assert_eq!(paddle.x, config.paddle_default_x()),
            }
        }
    }
}
