//! Raw-mode terminal session.
//!
//! Every way out of the program has to put the terminal back: the guard's
//! drop covers normal returns, `restore_and_exit` covers the input thread's
//! quit, and the panic hook covers crashes.

use std::io;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// Keeps the terminal in raw mode (no line buffering, no echo) until dropped.
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    pub fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        tracing::debug!("raw mode enabled");
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        restore();
    }
}

/// Leave raw mode. A no-op when raw mode is not active, so it is safe to
/// call from several exit paths.
pub fn restore() {
    match disable_raw_mode() {
        Ok(()) => tracing::debug!("terminal restored"),
        Err(err) => tracing::warn!(error = %err, "failed to restore terminal"),
    }
}

/// Restore the terminal and end the whole process
pub fn restore_and_exit(code: i32) -> ! {
    restore();
    std::process::exit(code)
}

/// Restore the terminal before the default panic message is printed
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore();
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
        previous(info);
    }));
}
