//! Text console.
//!
//! Stands in for the microcontroller's serial terminal. Reads one command
//! character at a time from any [`Read`] source and writes program output to
//! any [`Write`] sink, optionally mirroring everything printed into a
//! transcript file.

use std::fs::File;
use std::io::{self, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use crate::common::LabResult;

/// Console over an input source and an output sink.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    transcript: Option<BufWriter<File>>,
}

impl<R: Read, W: Write> Console<R, W> {
    /// Creates a console without a transcript.
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            transcript: None,
        }
    }

    /// Mirrors all subsequent output into a newly created file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`LabError::Io`](crate::common::LabError::Io) if the file cannot be created.
    pub fn with_transcript(mut self, path: impl AsRef<Path>) -> LabResult<Self> {
        let file = File::create(path)?;
        self.transcript = Some(BufWriter::new(file));
        Ok(self)
    }

    /// Writes `text` verbatim to the output and the transcript.
    ///
    /// # Errors
    ///
    /// Propagates any write failure.
    pub fn print(&mut self, text: &str) -> LabResult<()> {
        self.output.write_all(text.as_bytes())?;
        if let Some(transcript) = self.transcript.as_mut() {
            transcript.write_all(text.as_bytes())?;
        }
        Ok(())
    }

    /// Flushes the output and the transcript.
    ///
    /// # Errors
    ///
    /// Propagates any flush failure.
    pub fn flush(&mut self) -> LabResult<()> {
        self.output.flush()?;
        if let Some(transcript) = self.transcript.as_mut() {
            transcript.flush()?;
        }
        Ok(())
    }

    /// Reads the next command character.
    ///
    /// Pending output is flushed first so the prompt is visible. Carriage
    /// returns and line feeds are skipped: a line-buffered terminal sends them
    /// after every key, the lab board's terminal does not. Bytes are taken as
    /// Latin-1, matching the single-byte `getchar` of the target.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    ///
    /// # Errors
    ///
    /// Propagates read failures other than interruption.
    pub fn read_command(&mut self) -> LabResult<Option<char>> {
        self.flush()?;
        let mut byte = [0u8; 1];
        loop {
            match self.input.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) if matches!(byte[0], b'\r' | b'\n') => {}
                Ok(_) => return Ok(Some(char::from(byte[0]))),
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Returns the output sink.
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the console, flushing the transcript, and returns the output sink.
    ///
    /// # Errors
    ///
    /// Propagates a failure to flush the transcript.
    pub fn into_output(mut self) -> io::Result<W> {
        if let Some(transcript) = self.transcript.as_mut() {
            transcript.flush()?;
        }
        Ok(self.output)
    }
}
