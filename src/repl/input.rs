//! Where REPL lines come from.
//!
//! [`Lines`] wraps any `BufRead` (pipes, files, in-memory buffers). [`Terminal`]
//! drives a `rustyline` editor for interactive use, which adds line editing,
//! up-arrow recall and Ctrl-C detection.

use std::io::{self, BufRead, Write};

use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};

/// One read from a [`LineSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Text(String),
    /// Ctrl-C at the prompt.
    Interrupted,
    Eof,
}

/// Prompted line input for the REPL.
pub trait LineSource {
    /// Show `prompt` and read the next line.
    ///
    /// `output` is the stream the REPL prints to; sources that render their
    /// own prompt only flush it.
    fn next_line(&mut self, prompt: &str, output: &mut dyn Write) -> io::Result<Line>;
}

/// Line source over a `BufRead`. Cannot observe Ctrl-C.
pub struct Lines<R>(pub R);

impl<R: BufRead> LineSource for Lines<R> {
    fn next_line(&mut self, prompt: &str, output: &mut dyn Write) -> io::Result<Line> {
        write!(output, "{prompt}")?;
        output.flush()?;

        let mut line = String::new();
        if self.0.read_line(&mut line)? == 0 {
            return Ok(Line::Eof);
        }
        Ok(Line::Text(line))
    }
}

/// Interactive terminal input through `rustyline`.
pub struct Terminal {
    editor: DefaultEditor,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let config = Config::builder().auto_add_history(true).build();
        let editor = DefaultEditor::with_config(config).map_err(into_io)?;
        Ok(Self { editor })
    }
}

impl LineSource for Terminal {
    fn next_line(&mut self, prompt: &str, output: &mut dyn Write) -> io::Result<Line> {
        // The editor draws the prompt itself; earlier REPL output must land first
        output.flush()?;

        match self.editor.readline(prompt) {
            Ok(line) => Ok(Line::Text(line)),
            Err(ReadlineError::Interrupted) => Ok(Line::Interrupted),
            Err(ReadlineError::Eof) => Ok(Line::Eof),
            Err(err) => Err(into_io(err)),
        }
    }
}

fn into_io(err: ReadlineError) -> io::Error {
    match err {
        ReadlineError::Io(e) => e,
        other => io::Error::other(other.to_string()),
    }
}
