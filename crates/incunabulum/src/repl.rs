//! Read-eval-print loop
//!
//! Lines come from a [`LineSource`]: a plain reader for files and pipes, or a
//! `rustyline` editor for interactive terminals. Each value is written to
//! `out` followed by a blank line; errors go to `err` and the loop carries on.

use std::io::{self, BufRead, Write};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::Interpreter;

/// Prompt shown by [`TerminalSource`].
pub const PROMPT: &str = "   ";

/// Something that yields input lines until end of input.
pub trait LineSource {
    /// The next line without its terminator, or `None` at end of input.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Lines from any buffered reader, with no prompt.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// Lines from an interactive terminal, with editing and history.
pub struct TerminalSource {
    editor: DefaultEditor,
}

impl TerminalSource {
    /// Open a line editor on the terminal.
    pub fn new() -> io::Result<Self> {
        let editor = DefaultEditor::new().map_err(readline_to_io)?;
        Ok(Self { editor })
    }
}

impl LineSource for TerminalSource {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        match self.editor.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            // Ctrl-C drops the current line.
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(readline_to_io(e)),
        }
    }
}

fn readline_to_io(err: ReadlineError) -> io::Error {
    match err {
        ReadlineError::Io(e) => e,
        other => io::Error::other(other.to_string()),
    }
}

/// Run the loop until `input` is exhausted.
///
/// # Errors
///
/// Only I/O failures end the loop early; interpreter errors are reported on
/// `err` and the next line is read.
pub fn run<S, W, E>(
    interp: &mut Interpreter,
    input: &mut S,
    out: &mut W,
    err: &mut E,
) -> io::Result<()>
where
    S: LineSource,
    W: Write,
    E: Write,
{
    while let Some(line) = input.next_line()? {
        match interp.eval_line(&line) {
            Ok(Some(value)) => {
                write!(out, "{}", value)?;
                writeln!(out)?;
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(line = %line, error = %e, "line failed");
                writeln!(err, "error: {}", e)?;
            }
        }
        out.flush()?;
    }
    Ok(())
}
