//! Text output to the display

use std::io::{self, Write};

use game_core::{Board, Score};

const BELL: &[u8] = b"\x07";

/// Writes frames and banners. Raw mode turns off output post-processing, so
/// every line break goes out as `\r\n`.
pub struct Screen<W: Write> {
    out: W,
}

impl<W: Write> Screen<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write text, expanding `\n` to `\r\n`, and flush
    pub fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.replace('\n', "\r\n").as_bytes())?;
        self.out.flush()
    }

    /// Audible cue for a paddle hit
    pub fn bell(&mut self) -> io::Result<()> {
        self.out.write_all(BELL)
    }

    /// One rendered tick: the board followed by the score line
    pub fn frame(&mut self, board: &Board, score: Score) -> io::Result<()> {
        self.write_text(&format!("\n\n{board}\nScore: {}\n", score.value()))
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
