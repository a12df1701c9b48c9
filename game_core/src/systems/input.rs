use hecs::World;

use crate::components::*;
use crate::resources::*;
use crate::Config;

/// Keyboard commands understood by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Up,
    Down,
    Quit,
}

impl Command {
    /// Map a raw keystroke to a command; anything else is ignored
    pub fn from_char(key: char) -> Option<Self> {
        match key {
            'w' => Some(Command::Up),
            's' => Some(Command::Down),
            'q' => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Apply a command to the shared controls. Returns true when the session
/// should end.
pub fn apply_command(controls: &PaddleControls, command: Command, config: &Config) -> bool {
    match command {
        Command::Up => {
            controls.nudge(-1, config);
            false
        }
        Command::Down => {
            controls.nudge(1, config);
            false
        }
        Command::Quit => {
            controls.request_quit();
            true
        }
    }
}

/// Copy the latest row written by the input thread into the player paddle
pub fn ingest_inputs(world: &mut World, controls: &PaddleControls, config: &Config) {
    let row = config.clamp_paddle_row(controls.row());
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Player {
            paddle.row = row;
        }
    }
}
