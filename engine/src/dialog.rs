//! The modal confirmation capability.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use thiserror::Error;

use sketchbind_types::{DeletePrompt, PromptResponse};

#[derive(Debug, Error)]
pub enum DialogError {
    /// The input side of the surface closed before any of the four
    /// responses was given. There is no default choice to fall back to.
    #[error("confirmation input closed before a response was given")]
    Closed,
    #[error("confirmation surface failed: {0}")]
    Io(#[from] io::Error),
}

/// Blocking confirmation surface offering exactly the four responses.
///
/// Implementations must not expose any escape that maps to none of the
/// four; an unanswerable surface reports [`DialogError`] instead.
pub trait ConfirmDialog {
    fn confirm(&mut self, prompt: &DeletePrompt) -> Result<PromptResponse, DialogError>;
}

/// Line-oriented confirmation surface over any reader/writer pair.
///
/// Re-asks until the input parses as one of the four responses; there
/// is no default on empty or unrecognized input.
#[derive(Debug)]
pub struct ConsoleDialog<R, W> {
    reader: R,
    writer: W,
}

impl ConsoleDialog<BufReader<Stdin>, Stdout> {
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleDialog<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> ConfirmDialog for ConsoleDialog<R, W> {
    fn confirm(&mut self, prompt: &DeletePrompt) -> Result<PromptResponse, DialogError> {
        writeln!(self.writer, "{}", prompt.title())?;
        writeln!(self.writer, "{}", prompt.body())?;

        loop {
            write!(self.writer, "[Always/Yes/No/Never]: ")?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(DialogError::Closed);
            }
            match PromptResponse::parse(&line) {
                Some(response) => return Ok(response),
                None => writeln!(self.writer, "Please answer Always, Yes, No, or Never.")?,
            }
        }
    }
}
