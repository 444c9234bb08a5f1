//! Console input validation.
//!
//! Reads whitespace-separated tokens from a line-oriented stream. A token
//! that is not an integer throws away the rest of its line; a valid one
//! leaves any remaining tokens queued for the next read.

use std::collections::VecDeque;
use std::fmt;
use std::io::{BufRead, Write};

use tracing::trace;

use crate::error::{ChoiceError, InputError, InputResult};

/// Re-prompt shown when a troop count is not a number.
const TROOPS_RETRY_PROMPT: &str = "Invalid entry. Type again: ";

/// Line-oriented console over any reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    /// Tokens left over from the most recently read line.
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wrap an input and output stream.
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Consume the console, returning the output stream.
    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Write a full line of text.
    ///
    /// # Errors
    ///
    /// Returns an error if the output stream fails.
    pub fn write_line(&mut self, line: impl fmt::Display) -> InputResult<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Write a prompt without a trailing newline and flush it.
    ///
    /// # Errors
    ///
    /// Returns an error if the output stream fails.
    pub fn prompt(&mut self, text: &str) -> InputResult<()> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one integer token.
    ///
    /// Returns `Ok(None)` when the token does not parse; the rest of that
    /// line is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Closed`] at end of input.
    pub fn read_integer(&mut self) -> InputResult<Option<i64>> {
        let token = self.next_token()?;
        if let Ok(value) = token.parse::<i64>() {
            Ok(Some(value))
        } else {
            trace!(%token, discarded = self.pending.len(), "non-numeric entry");
            self.pending.clear();
            Ok(None)
        }
    }

    /// Prompt until the player enters `0` (when `allow_zero`) or a value in `1..=max`.
    ///
    /// Non-numeric entries print "Invalid entry!", out-of-range numbers print
    /// "Invalid choice! Try again.", and the prompt repeats either way.
    ///
    /// # Errors
    ///
    /// Returns an error only if the console closes or fails.
    pub fn read_bounded_integer(
        &mut self,
        prompt: &str,
        max: u32,
        allow_zero: bool,
    ) -> InputResult<u32> {
        loop {
            self.prompt(prompt)?;
            let entry = self.read_integer()?;
            match classify_choice(entry, max, allow_zero) {
                Ok(choice) => return Ok(choice),
                Err(rejection) => self.write_line(rejection)?,
            }
        }
    }

    /// Prompt for a troop count.
    ///
    /// Non-numeric entries are re-asked; negative values become zero.
    ///
    /// # Errors
    ///
    /// Returns an error only if the console closes or fails.
    pub fn read_troops(&mut self, prompt: &str) -> InputResult<u32> {
        self.prompt(prompt)?;
        loop {
            if let Some(value) = self.read_integer()? {
                return Ok(clamp_troops(value));
            }
            self.prompt(TROOPS_RETRY_PROMPT)?;
        }
    }

    /// Prompt for a line of text, trimmed and truncated to `max_chars`.
    ///
    /// Tokens still queued from the current line are used first. Otherwise
    /// blank lines are skipped until some text arrives.
    ///
    /// # Errors
    ///
    /// Returns an error if the console closes or fails.
    pub fn read_text(&mut self, prompt: &str, max_chars: usize) -> InputResult<String> {
        self.prompt(prompt)?;

        let text = if self.pending.is_empty() {
            loop {
                let line = self.read_line()?;
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    break trimmed.to_owned();
                }
            }
        } else {
            self.pending.drain(..).collect::<Vec<_>>().join(" ")
        };

        Ok(truncate_chars(&text, max_chars))
    }

    fn next_token(&mut self) -> InputResult<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let line = self.read_line()?;
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    fn read_line(&mut self) -> InputResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }
        Ok(line)
    }
}

/// Decide whether a parsed entry is an acceptable choice.
///
/// # Errors
///
/// [`ChoiceError::NotANumber`] for a failed parse, [`ChoiceError::OutOfRange`]
/// for anything other than `0` (when allowed) or `1..=max`.
pub fn classify_choice(entry: Option<i64>, max: u32, allow_zero: bool) -> Result<u32, ChoiceError> {
    let value = entry.ok_or(ChoiceError::NotANumber)?;
    if allow_zero && value == 0 {
        return Ok(0);
    }
    match u32::try_from(value) {
        Ok(choice) if (1..=max).contains(&choice) => Ok(choice),
        _ => Err(ChoiceError::OutOfRange(value)),
    }
}

/// Coerce a raw troop entry into a count.
#[must_use]
pub fn clamp_troops(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

/// First `max_chars` characters of `text`.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
