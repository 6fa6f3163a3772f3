//! Line-based console I/O with validated reads.
//!
//! Every validated read loops until the user supplies acceptable input,
//! reporting each rejection through [`report_invalid`]. Only end-of-file and
//! genuine I/O failures escape as errors.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;

use crate::error::ConsoleError;

/// An interactive console over any buffered reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console and hand back the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Write text without a trailing newline and flush, so the cursor stays
    /// on the prompt line.
    pub fn prompt(&mut self, text: &str) -> Result<(), ConsoleError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Write one line of output.
    pub fn say(&mut self, text: impl Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Report a rejected input through [`report_invalid`].
    pub fn reject(&mut self, message: &str) -> Result<(), ConsoleError> {
        report_invalid(&mut self.output, message)?;
        Ok(())
    }

    /// Read one raw line with the line terminator removed. `None` at
    /// end-of-file.
    pub fn read_line(&mut self) -> Result<Option<String>, ConsoleError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Read an integer inside `range`, re-prompting until one arrives.
    pub fn read_int(&mut self, range: &RangeInclusive<u32>) -> Result<u32, ConsoleError> {
        loop {
            let line = self.read_line()?.ok_or(ConsoleError::InputClosed)?;
            match line.trim().parse::<u32>() {
                Ok(value) if range.contains(&value) => return Ok(value),
                _ => {
                    tracing::debug!(input = %line, min = range.start(), max = range.end(), "rejected number");
                    self.reject(&format!(
                        "Invalid input. Please enter a number between {} and {}: ",
                        range.start(),
                        range.end()
                    ))?;
                }
            }
        }
    }

    /// Read a line containing at least one non-whitespace character.
    pub fn read_text(&mut self) -> Result<String, ConsoleError> {
        loop {
            let line = self.read_line()?.ok_or(ConsoleError::InputClosed)?;
            if !line.trim().is_empty() {
                return Ok(line);
            }
            tracing::debug!("rejected empty text");
            self.reject("Input cannot be empty. Please try again: ")?;
        }
    }
}

/// Tell the user their last input was rejected.
pub fn report_invalid<W: Write>(out: &mut W, message: &str) -> std::io::Result<()> {
    write!(out, "{message}")?;
    out.flush()
}
