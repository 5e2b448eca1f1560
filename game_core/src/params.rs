/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Board
    pub const BOARD_WIDTH: f32 = 800.0;
    pub const BOARD_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const CPU_STEP: f32 = 5.0; // units per tick

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED_BASE: f32 = 5.0;
    pub const BALL_SPEED_STEP: f32 = 1.0; // Added on every paddle hit
    pub const BALL_VEL_INITIAL: (f32, f32) = (5.0, 5.0);
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    // Separator
    pub const SEPARATOR_WIDTH: f32 = 2.0;
    pub const SEPARATOR_HEIGHT: f32 = 10.0;
    pub const SEPARATOR_GAP: f32 = 20.0; // Distance between segment tops

    // Score text
    pub const SCORE_FONT: &'static str = "60px Arial";

    // Timing
    pub const TICK_RATE_HZ: u32 = 50;
}
