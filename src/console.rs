//! Console collaborators: where input comes from and where text goes.
//!
//! The session only talks to these traits, so tests drive a whole game
//! with [`ScriptedInput`] and a `Vec<u8>` sink.

use crossterm::{
    Command,
    cursor::MoveTo,
    terminal::{Clear, ClearType},
};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use tracing::{instrument, trace};

/// Source of user input, one line at a time.
pub trait InputSource {
    /// Reads the next line without its terminator. `Ok(None)` means the
    /// stream is closed.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// How the screen is reset between renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClearStyle {
    /// Scroll the old board away with blank lines.
    #[default]
    BlankLines,
    /// Emit the terminal clear sequence.
    Terminal,
    /// Leave previous output in place.
    None,
}

/// Destination for human-readable text.
pub trait OutputSink {
    /// Writes `text` as-is.
    fn write_str(&mut self, text: &str) -> io::Result<()>;

    /// Writes `text` followed by a newline.
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.write_str(text)?;
        self.write_str("\n")
    }

    /// Resets the display. `lines` is only used by [`ClearStyle::BlankLines`].
    #[instrument(skip(self))]
    fn clear_screen(&mut self, style: ClearStyle, lines: usize) -> io::Result<()> {
        match style {
            ClearStyle::BlankLines => {
                for _ in 0..lines {
                    self.write_str("\n")?;
                }
                Ok(())
            }
            ClearStyle::Terminal => {
                let mut sequence = String::new();
                Clear(ClearType::All)
                    .write_ansi(&mut sequence)
                    .and_then(|()| MoveTo(0, 0).write_ansi(&mut sequence))
                    .map_err(io::Error::other)?;
                self.write_str(&sequence)
            }
            ClearStyle::None => Ok(()),
        }
    }
}

/// Line reader over any buffered reader, stdin by default.
pub struct StdinInput<R = io::StdinLock<'static>> {
    reader: R,
}

impl StdinInput {
    /// Reads from the process's stdin.
    pub fn new() -> Self {
        Self {
            reader: io::stdin().lock(),
        }
    }
}

impl Default for StdinInput {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead> StdinInput<R> {
    /// Reads from an arbitrary buffered reader.
    pub fn from_reader(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for StdinInput<R> {
    #[instrument(skip(self))]
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        // Undecodable bytes become U+FFFD and fail selector parsing later
        let line = String::from_utf8_lossy(&buf)
            .trim_end_matches(['\n', '\r'])
            .to_string();
        trace!(%line, "Line read");
        Ok(Some(line))
    }
}

/// Pre-recorded input lines.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    /// Creates a script from lines, played in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Output sink over any writer.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Borrows the wrapped writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        // Prompts have no newline and must show before the read blocks
        self.writer.flush()
    }
}
