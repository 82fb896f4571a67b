/// Game tuning parameters for the pickleball court
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court (pixels, origin top-left)
    pub const COURT_WIDTH: f32 = 800.0;
    pub const COURT_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const OPPONENT_TRACKING_SPEED: f32 = 3.5; // max pixels per tick

    // Ball
    pub const BALL_SIZE: f32 = 12.0;
    pub const SERVE_SPEED_X: f32 = 4.0; // pixels per tick
    pub const OPENING_SPEED_Y: f32 = 3.0;
    pub const SERVE_ANGLE_RANGE: f32 = 3.0; // vy drawn from [-3, 3] on serve
    pub const BALL_SPEED_INCREASE: f32 = 1.05; // Multiply |vx| on paddle hit, no cap
    pub const RETURN_ANGLE_FACTOR: f32 = 6.0; // vy = hit offset * factor

    // Score
    pub const WIN_SCORE: u8 = 11;

    // Timing
    pub const TICK_MS: u64 = 16; // ~60 Hz
}
