use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal client failures. Player loss and quit are not errors.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to configure terminal: {0}")]
    Terminal(#[source] io::Error),
    #[error("failed to start input thread: {0}")]
    InputThread(#[source] io::Error),
    #[error("failed to write to display: {0}")]
    Output(#[source] io::Error),
    #[error("failed to open log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Process exit status for this failure
    pub fn exit_code(&self) -> u8 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_thread_failure_message_and_code() {
        let err = Error::InputThread(io::Error::new(io::ErrorKind::WouldBlock, "no threads"));
        assert_eq!(err.to_string(), "failed to start input thread: no threads");
        assert_eq!(err.exit_code(), 1);
    }
}
