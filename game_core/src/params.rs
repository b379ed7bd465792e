/// Game tuning parameters for Pong
///
/// Distances are canvas pixels, velocities are pixels per frame.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield (used until the host reports its real size)
    pub const DEFAULT_WIDTH: f32 = 600.0;
    pub const DEFAULT_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 5.0;
    pub const PADDLE_HEIGHT: f32 = 50.0;
    pub const PADDLE_SPEED: f32 = 4.0;
    pub const PADDLE_MARGIN: f32 = 10.0; // Gap between paddle and side wall

    // Ball
    pub const BALL_RADIUS: f32 = 5.0;
    pub const BALL_SPEED_INCREASE: f32 = 1.1; // Multiply horizontal speed on paddle hit
    pub const BALL_SPIN: f32 = 0.1; // Vertical speed per pixel off paddle centre

    // Serve
    pub const SERVE_DELAY: f32 = 0.5; // seconds
    pub const SERVE_SPEED_X: f32 = 3.0;
    pub const SERVE_SPREAD_Y: f32 = 2.0; // vy drawn from [-spread, spread)

    // Opponent
    pub const OPPONENT_GAIN: f32 = 0.08;

    // Score
    pub const WIN_SCORE: u8 = 5; // First to 5 wins

    // Timing
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
