//! Fixed-rate tick loop

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use game_core::{Game, TickOutcome};

use crate::screen::Screen;

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    PlayerMissed { score: u32 },
}

/// Tick, render, sleep; until the player quits or misses.
///
/// The sleep is a fixed `frame_interval` no matter how long the tick took.
pub fn run_session<W: Write>(
    game: &mut Game,
    screen: &mut Screen<W>,
    frame_interval: Duration,
) -> io::Result<SessionEnd> {
    let controls = game.controls();
    tracing::info!(?frame_interval, "session started");

    loop {
        if controls.quit_requested() {
            tracing::info!(ticks = game.tick_count(), "session quit");
            return Ok(SessionEnd::Quit);
        }

        if game.tick() == TickOutcome::PlayerMissed {
            let score = game.score().value();
            tracing::info!(score, ticks = game.tick_count(), "player missed");
            return Ok(SessionEnd::PlayerMissed { score });
        }

        for _ in 0..game.events().paddle_hits() {
            screen.bell()?;
        }

        let score = game.score();
        screen.frame(game.render(), score)?;

        if !frame_interval.is_zero() {
            thread::sleep(frame_interval);
        }
    }
}
