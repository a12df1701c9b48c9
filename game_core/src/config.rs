use std::time::Duration;

use glam::Vec2;

use crate::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub board_width: i32,
    pub board_height: i32,
    pub paddle_width: i32,
    pub paddle_edge_deflection: f32,
    pub center_nudge: f32,
    pub seconds_to_cross_board: u32,
    pub frames_per_second: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_width: Params::BOARD_WIDTH,
            board_height: Params::BOARD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_edge_deflection: Params::PADDLE_EDGE_DEFLECTION,
            center_nudge: Params::CENTER_NUDGE,
            seconds_to_cross_board: Params::SECONDS_TO_CROSS_BOARD,
            frames_per_second: Params::FRAMES_PER_SECOND,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Column the ball must reach to meet the player's paddle
    pub fn player_edge(&self) -> i32 {
        1
    }

    /// Column the ball must reach to meet the opponent's paddle
    pub fn opponent_edge(&self) -> i32 {
        self.board_width - 1
    }

    pub fn top_wall(&self) -> i32 {
        0
    }

    pub fn bottom_wall(&self) -> i32 {
        self.board_height - 1
    }

    /// Largest row offset from the paddle centre that still counts as a hit.
    /// One forgiveness cell is added on each side.
    pub fn paddle_reach(&self) -> i32 {
        self.paddle_width / 2 + 1
    }

    pub fn min_paddle_row(&self) -> i32 {
        1
    }

    pub fn max_paddle_row(&self) -> i32 {
        self.board_height - 2
    }

    /// Clamp a paddle row to the board
    pub fn clamp_paddle_row(&self, row: i32) -> i32 {
        row.clamp(self.min_paddle_row(), self.max_paddle_row())
    }

    pub fn center_row(&self) -> i32 {
        self.board_height / 2
    }

    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(
            (self.board_width / 2) as f32,
            (self.board_height / 2) as f32,
        )
    }

    /// Serve velocity: straight toward the player, crossing the board in
    /// `seconds_to_cross_board` at `frames_per_second`.
    pub fn initial_ball_velocity(&self) -> Vec2 {
        let frames = (self.seconds_to_cross_board * self.frames_per_second) as f32;
        Vec2::new(-(self.board_width as f32 / frames), 0.0)
    }

    /// Fixed sleep between ticks
    pub fn frame_interval(&self) -> Duration {
        Duration::from_micros(1_000_000 / u64::from(self.frames_per_second.max(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_edges() {
        let config = Config::new();
        assert_eq!(config.player_edge(), 1, "Player edge column");
        assert_eq!(config.opponent_edge(), 99, "Opponent edge column");
        assert_eq!(config.top_wall(), 0);
        assert_eq!(config.bottom_wall(), 29);
    }

    #[test]
    fn test_config_clamp_paddle_row() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_row(-5), 1);
        assert_eq!(config.clamp_paddle_row(0), 1);
        assert_eq!(config.clamp_paddle_row(100), 28);
        assert_eq!(config.clamp_paddle_row(12), 12);
    }

    #[test]
    fn test_config_paddle_reach_includes_forgiveness() {
        let config = Config::new();
        assert_eq!(config.paddle_reach(), 2);
    }

    #[test]
    fn test_config_serve() {
        let config = Config::new();
        assert_eq!(config.ball_spawn(), Vec2::new(50.0, 15.0));

        let vel = config.initial_ball_velocity();
        assert!((vel.x + 100.0 / 120.0).abs() < 1e-6, "got {}", vel.x);
        assert_eq!(vel.y, 0.0);
    }

    #[test]
    fn test_config_frame_interval() {
        let config = Config::new();
        assert_eq!(config.frame_interval(), Duration::from_micros(16_666));
    }
}
