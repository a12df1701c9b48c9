//! Terminal client for Pong
//!
//! Two threads share one `PaddleControls`: the main thread runs the tick
//! loop and draws frames to stdout, the input thread blocks on keystrokes
//! and moves the player's paddle.

pub mod banner;
pub mod config;
pub mod error;
pub mod game_loop;
pub mod input;
pub mod logging;
pub mod screen;
pub mod terminal;

pub use banner::Pacing;
pub use config::Settings;
pub use error::Error;
pub use game_loop::{run_session, SessionEnd};
pub use screen::Screen;
