//! Clipboard backed by any `io::Write`

use std::io::Write;

use super::{ClipboardWriter, PortError};

/// Writes each clipboard value verbatim to the wrapped writer
#[derive(Debug)]
pub struct WriterClipboard<W> {
    out: W,
}

impl<W: Write> WriterClipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl WriterClipboard<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ClipboardWriter for WriterClipboard<W> {
    fn write(&mut self, text: &str) -> Result<(), PortError> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}
