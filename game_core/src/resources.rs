use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

use crate::Config;

/// Player score - number of successful returns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score(pub u32);

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn increment(&mut self) {
        self.0 += 1;
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub player_returned: bool,
    pub opponent_returned: bool,
    pub ball_hit_wall: bool,
    pub player_missed: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.player_returned = false;
        self.opponent_returned = false;
        self.ball_hit_wall = false;
        self.player_missed = false;
    }

    /// Number of paddle contacts this tick, one audible cue each
    pub fn paddle_hits(&self) -> usize {
        usize::from(self.player_returned) + usize::from(self.opponent_returned)
    }
}

/// State shared between the input thread and the game loop.
///
/// The input thread is the only writer of `row`; the game loop reads it once
/// per tick. Relaxed ordering is enough: a keystroke may show up one frame
/// late, but a row is never torn.
#[derive(Debug)]
pub struct PaddleControls {
    row: AtomicI32,
    quit: AtomicBool,
}

impl PaddleControls {
    pub fn new(row: i32) -> Self {
        Self {
            row: AtomicI32::new(row),
            quit: AtomicBool::new(false),
        }
    }

    pub fn row(&self) -> i32 {
        self.row.load(Ordering::Relaxed)
    }

    /// Move the paddle one row by `delta`, clamped to the board. Returns the new row.
    pub fn nudge(&self, delta: i32, config: &Config) -> i32 {
        let prev = self
            .row
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |row| {
                Some(config.clamp_paddle_row(row + delta))
            })
            .unwrap_or_else(|row| row);
        config.clamp_paddle_row(prev + delta)
    }

    pub fn request_quit(&self) {
        self.quit.store(true, Ordering::Relaxed);
    }

    pub fn quit_requested(&self) -> bool {
        self.quit.load(Ordering::Relaxed)
    }
}
