/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court
    pub const COURT_WIDTH: f32 = 300.0;
    pub const COURT_HEIGHT: f32 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 50.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    pub const PLAYER_PADDLE_Y: f32 = 480.0; // near bottom edge
    pub const OPPONENT_PADDLE_Y: f32 = 10.0; // near top edge

    // Ball
    pub const BALL_RADIUS: f32 = 5.0;
    pub const BALL_SPEED_BASE: f32 = 3.0; // pixels per tick
    pub const BALL_SPEED_MAX: f32 = 8.0;
    pub const BALL_SPEED_RAMP: f32 = 0.08; // per total point scored

    // Opponent
    pub const OPPONENT_SPEED_BASE: f32 = 1.5;
    pub const OPPONENT_SPEED_MAX: f32 = 6.0;
    pub const OPPONENT_SPEED_RAMP: f32 = 0.12; // per total point scored
    pub const REACTION_BASE: f32 = 50.0; // dead-band half-width in pixels
    pub const REACTION_MIN: f32 = 15.0;
    pub const REACTION_DROP: f32 = 0.06; // per player point
    pub const REACTION_JITTER: f32 = 0.1; // fraction of threshold

    // In-round speed ramp
    pub const ROUND_RAMP_STEP: f32 = 0.3;
    pub const ROUND_RAMP_INTERVAL_MS: f64 = 10_000.0;
    pub const ROUND_RAMP_MAX: f32 = 2.0;

    // Paddle bounce
    pub const HIT_ANGLE_FACTOR: f32 = 0.5; // hit position to horizontal speed
}
