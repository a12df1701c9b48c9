/// Game tuning parameters for terminal Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Board (cells)
    pub const BOARD_WIDTH: i32 = 100;
    pub const BOARD_HEIGHT: i32 = 30;

    // Paddle
    pub const PADDLE_WIDTH: i32 = 3;
    pub const PADDLE_EDGE_DEFLECTION: f32 = 0.05; // vy change on a top/bottom hit
    pub const CENTER_NUDGE: f32 = 0.01; // base of the score-derived nudge

    // Ball
    pub const SECONDS_TO_CROSS_BOARD: u32 = 2;

    // Loop
    pub const FRAMES_PER_SECOND: u32 = 60;
}
