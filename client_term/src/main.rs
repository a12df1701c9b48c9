use std::io::{self, BufWriter};
use std::process::ExitCode;

use client_term::input::{spawn_input_thread, TerminalKeys};
use client_term::terminal::{self, RawModeGuard};
use client_term::{banner, logging, run_session, Error, Screen, SessionEnd, Settings};
use game_core::{Config, Game};

fn main() -> ExitCode {
    let settings = Settings::from_env();
    if let Err(err) = logging::init_tracing(&settings) {
        eprintln!("{err}; continuing without logs");
    }
    terminal::install_panic_hook();

    match run(&settings) {
        Ok(end) => {
            tracing::info!(?end, "exiting");
            ExitCode::SUCCESS
        }
        Err(err) => {
            terminal::restore();
            tracing::error!(error = %err, "fatal");
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(settings: &Settings) -> Result<SessionEnd, Error> {
    let config = Config::new();
    let mut game = Game::new(config.clone());

    let guard = RawModeGuard::enable().map_err(Error::Terminal)?;
    let mut screen = Screen::new(BufWriter::new(io::stdout()));

    // Quit from the keyboard ends the process straight from the input thread
    spawn_input_thread(TerminalKeys, game.controls(), config.clone(), || {
        terminal::restore_and_exit(0)
    })
    .map_err(Error::InputThread)?;

    let pacing = settings.pacing();
    banner::play_intro(&mut screen, pacing).map_err(Error::Output)?;

    let end = run_session(&mut game, &mut screen, config.frame_interval()).map_err(Error::Output)?;
    match end {
        SessionEnd::PlayerMissed { score } => {
            banner::play_outro(&mut screen, score, pacing).map_err(Error::Output)?;
        }
        SessionEnd::Quit => screen.write_text("\n\n").map_err(Error::Output)?,
    }

    drop(guard);
    Ok(end)
}
