/// Game score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_player(&mut self) {
        self.player += 1;
    }

    pub fn increment_opponent(&mut self) {
        self.opponent += 1;
    }

    pub fn total(&self) -> u32 {
        self.player + self.opponent
    }
}

/// Match lifecycle flags and the current rally's start time.
///
/// `started` stays distinct from `running` so an initialized-but-paused
/// match can be represented, even though the current controls never pause.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchState {
    pub started: bool,
    pub running: bool,
    pub round_start_ms: f64,
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin ticking. Safe to call redundantly.
    pub fn start(&mut self, now_ms: f64) {
        self.started = true;
        self.running = true;
        self.round_start_ms = now_ms;
    }

    /// Halt ticking and clear both flags. Safe to call redundantly.
    pub fn stop(&mut self) {
        self.started = false;
        self.running = false;
    }

    /// Mark the start of a fresh rally
    pub fn reset_round(&mut self, now_ms: f64) {
        self.round_start_ms = now_ms;
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub player_scored: bool,
    pub opponent_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Random number generator, seeded so tests are deterministic
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}
