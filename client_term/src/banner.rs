//! Intro and outro screens

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::screen::Screen;

const LOGO: &str = "
\tPPPPPP      OOOO     NNNN       NN      OOOO
\tPPPPPPP    OOOOOO    NNNNN      NN    OOOOOOOO
\tPPPPPPPP  OO    OO   NN NNN     NN   OO      OO
\tPP   PPP OO      OO  NN  NNN    NN  OO       OO
\tPPPPPPP  OO      OO  NN   NNN   NN  OO
\tPPPPPP   OO      OO  NN    NNN  NN  OO    OOOOO
\tPP        OO    OO   NN     NNN NN   OO      OO
\tPP         OOOOOO    NN      NNNNN    OOOOOOOO
\tPP          OOOO     NN       NNNN      OOOO
";

const HELP: &str = "\n\n\nCommands:\n\tW: move up\n\tS: move down\n\tQ: quit\n\nGood Luck!\n\n";

/// Whether banners pause between lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    RealTime,
    Instant,
}

impl Pacing {
    fn pause(self, secs: u64) {
        if self == Pacing::RealTime {
            thread::sleep(Duration::from_secs(secs));
        }
    }
}

pub fn play_intro<W: Write>(screen: &mut Screen<W>, pacing: Pacing) -> io::Result<()> {
    screen.write_text("\nWelcome to...\n\n\n")?;
    screen.write_text(LOGO)?;
    screen.write_text(HELP)?;
    pacing.pause(2);

    for step in ["Starting in 3...", " 2...", " 1..."] {
        screen.write_text(step)?;
        pacing.pause(1);
    }
    screen.write_text(" GO!\n\n")?;
    pacing.pause(1);
    Ok(())
}

/// Closing line for a final score
pub fn outro_remark(score: u32) -> &'static str {
    match score {
        0 => "Really? Not a single volley?",
        1..=99 => "Not bad! Not good either....",
        _ => "You're getting pretty good!",
    }
}

pub fn play_outro<W: Write>(screen: &mut Screen<W>, score: u32, pacing: Pacing) -> io::Result<()> {
    pacing.pause(1);
    screen.write_text(&"\n".repeat(29))?;
    screen.write_text(&format!("Oops! You lost.\n\nYour score was: {score}\n"))?;
    pacing.pause(3);
    screen.write_text(&format!("\n{}\n\n", outro_remark(score)))?;
    pacing.pause(3);
    screen.write_text("Goodbye.\n")?;
    pacing.pause(1);
    Ok(())
}
