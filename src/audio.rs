use std::io::Write;

use crate::error::GameError;
use crate::orchestrator::AudioSink;

/// Sounds the terminal bell as the lose alert.
pub struct TerminalBell<W> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play_alert(&mut self) -> Result<(), GameError> {
        self.out.write_all(b"\x07")?;
        self.out.flush()?;
        Ok(())
    }
}
