//! Parsing of a single REPL input line.

use thiserror::Error;

use crate::error::CalcError;
use crate::operation;

const EXIT: &str = "exit";
const HELP: &str = "help";
const HISTORY: &str = "history";
const CLEAR: &str = "clear";

/// One line of REPL input.
#[derive(Debug, PartialEq)]
pub enum Command<'a> {
    Exit,
    Help,
    History,
    Clear,
    Calculate { operation: &'a str, a: f64, b: f64 },
}

#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("empty line")]
    EmptyLine,

    #[error("expected 3 tokens, got {0}")]
    WrongTokenCount(usize),

    #[error(transparent)]
    Operand(#[from] CalcError),
}

impl<'a> TryFrom<&'a str> for Command<'a> {
    type Error = InputError;

    // Keywords must match the whole trimmed line; everything else is
    // `<operation> <num1> <num2>`
    fn try_from(line: &'a str) -> Result<Self, Self::Error> {
        let line = line.trim();

        match line {
            "" => return Err(InputError::EmptyLine),
            EXIT => return Ok(Command::Exit),
            HELP => return Ok(Command::Help),
            HISTORY => return Ok(Command::History),
            CLEAR => return Ok(Command::Clear),
            _ => {}
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [operation, a, b] = tokens[..] else {
            return Err(InputError::WrongTokenCount(tokens.len()));
        };

        Ok(Command::Calculate {
            operation,
            a: operation::parse_operand(a)?,
            b: operation::parse_operand(b)?,
        })
    }
}
