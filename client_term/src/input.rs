//! Keyboard input thread

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use game_core::systems::{apply_command, Command};
use game_core::{Config, PaddleControls};

/// A single keystroke from the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keystroke {
    Char(char),
    /// Ctrl+C. Raw mode swallows the signal, so it arrives as a key.
    Interrupt,
}

impl Keystroke {
    pub fn command(self) -> Option<Command> {
        match self {
            Keystroke::Char(c) => Command::from_char(c),
            Keystroke::Interrupt => Some(Command::Quit),
        }
    }
}

/// Blocking source of keystrokes. `Ok(None)` means the source is exhausted.
pub trait KeySource {
    fn next_key(&mut self) -> io::Result<Option<Keystroke>>;
}

/// Keystrokes read from the terminal via crossterm
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> io::Result<Option<Keystroke>> {
        loop {
            if let Event::Key(KeyEvent {
                code: KeyCode::Char(c),
                modifiers,
                kind,
                ..
            }) = event::read()?
            {
                if kind == KeyEventKind::Release {
                    continue;
                }
                if c == 'c' && modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(Some(Keystroke::Interrupt));
                }
                return Ok(Some(Keystroke::Char(c)));
            }
        }
    }
}

/// Why the input loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputExit {
    Quit,
    Closed,
}

/// Read keys until quit or until the source runs dry, moving the paddle as
/// commands arrive. Unknown keys are ignored.
pub fn run_input_loop<S: KeySource>(
    source: &mut S,
    controls: &PaddleControls,
    config: &Config,
) -> io::Result<InputExit> {
    while let Some(key) = source.next_key()? {
        let Some(command) = key.command() else {
            continue;
        };
        if apply_command(controls, command, config) {
            tracing::info!("quit requested");
            return Ok(InputExit::Quit);
        }
        tracing::trace!(?command, row = controls.row(), "paddle moved");
    }
    Ok(InputExit::Closed)
}

/// Start the input thread. `on_quit` runs on that thread once the player
/// quits; the binary passes a closure that restores the terminal and exits.
pub fn spawn_input_thread<S, F>(
    source: S,
    controls: Arc<PaddleControls>,
    config: Config,
    on_quit: F,
) -> io::Result<JoinHandle<()>>
where
    S: KeySource + Send + 'static,
    F: FnOnce() + Send + 'static,
{
    thread::Builder::new()
        .name("input".to_string())
        .spawn(move || {
            let mut source = source;
            match run_input_loop(&mut source, &controls, &config) {
                Ok(InputExit::Quit) => on_quit(),
                Ok(InputExit::Closed) => tracing::warn!("key source closed"),
                Err(err) => tracing::error!(error = %err, "failed to read keyboard input"),
            }
        })
}
