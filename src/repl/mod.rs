//! Interactive read-evaluate-print loop.
//!
//! Reads `<operation> <num1> <num2>` lines, builds the calculation through a
//! [`CalculationRegistry`], prints the result and records it in the session
//! [`History`]. Input comes from a [`LineSource`]: a `rustyline` [`Terminal`]
//! when interactive, or any `BufRead` through [`Lines`].

pub mod command;
pub mod history;
pub mod input;

pub use command::{Command, InputError};
pub use history::History;
pub use input::{Line, LineSource, Lines, Terminal};

use std::io::{self, BufRead, Write};

use crate::calculation::CalculationRegistry;
use crate::config::ReplConfig;
use crate::error::CalcError;
use crate::{debug_event, log_event};

const USAGE_HINT: &str = "Invalid input. Please follow the format: <operation> <num1> <num2>";

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The user typed `exit`.
    Command,
    /// Input reached end of file.
    Eof,
    /// Ctrl-C at the prompt.
    Interrupted,
}

enum Flow {
    Continue,
    Stop,
}

/// REPL session bound to a registry.
pub struct Repl<'r> {
    registry: &'r CalculationRegistry,
    config: ReplConfig,
    history: History,
}

impl<'r> Repl<'r> {
    pub fn new(registry: &'r CalculationRegistry, config: ReplConfig) -> Self {
        let history = History::with_limit(config.history_limit);
        Self {
            registry,
            config,
            history,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Run over buffered input until `exit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: W) -> io::Result<Exit> {
        self.run_with(&mut Lines(input), output)
    }

    /// Run until `exit`, end of input or an interrupt.
    pub fn run_with<S: LineSource, W: Write>(&mut self, source: &mut S, mut output: W) -> io::Result<Exit> {
        if self.config.show_banner {
            writeln!(output, "Welcome to the Professional Calculator REPL!")?;
            writeln!(output, "Type 'help' for instructions or 'exit' to quit.\n")?;
        }

        loop {
            let line = match source.next_line(&self.config.prompt, &mut output)? {
                Line::Text(line) => line,
                Line::Interrupted => {
                    writeln!(output, "\nKeyboard interrupt detected. Exiting calculator. Goodbye!")?;
                    debug_event!("repl", "interrupted");
                    return Ok(Exit::Interrupted);
                }
                Line::Eof => {
                    writeln!(output, "\nEOF detected. Exiting calculator. Goodbye!")?;
                    debug_event!("repl", "eof");
                    return Ok(Exit::Eof);
                }
            };

            if let Flow::Stop = self.handle_line(&line, &mut output)? {
                return Ok(Exit::Command);
            }
        }
    }

    fn handle_line<W: Write>(&mut self, line: &str, output: &mut W) -> io::Result<Flow> {
        match Command::try_from(line) {
            Ok(Command::Exit) => {
                writeln!(output, "Exiting calculator. Goodbye!")?;
                return Ok(Flow::Stop);
            }
            Ok(Command::Help) => self.display_help(output)?,
            Ok(Command::History) => self.display_history(output)?,
            Ok(Command::Clear) => {
                self.history.clear();
                writeln!(output, "History cleared.")?;
            }
            Ok(Command::Calculate { operation, a, b }) => {
                self.calculate(operation, a, b, output)?
            }
            Err(InputError::EmptyLine) => {}
            Err(InputError::WrongTokenCount(count)) => {
                debug_event!("repl", "rejected", "{count} tokens");
                writeln!(output, "{USAGE_HINT}")?;
            }
            Err(InputError::Operand(e)) => {
                debug_event!("repl", "rejected", "{e}");
                writeln!(output, "{USAGE_HINT}")?;
                writeln!(output, "Type 'help' for more information.\n")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn calculate<W: Write>(&mut self, operation: &str, a: f64, b: f64, output: &mut W) -> io::Result<()> {
        debug_event!("repl", "dispatch", "{operation} {a} {b}");

        let calculation = match self.registry.create(operation, a, b) {
            Ok(calculation) => calculation,
            Err(e) => {
                log_event!("repl", "unknown operation", "{operation}");
                writeln!(output, "{e}")?;
                writeln!(output, "Type 'help' to see the list of supported operations.\n")?;
                return Ok(());
            }
        };

        match calculation.render() {
            Ok(rendered) => {
                writeln!(output, "Result: {rendered}\n")?;
                self.history.push(calculation);
            }
            Err(CalcError::DivisionByZero) => {
                log_event!("repl", "division by zero", "{calculation:?}");
                writeln!(output, "Cannot divide by zero.")?;
                writeln!(output, "Please enter a non-zero divisor.\n")?;
            }
            Err(e) => {
                log_event!("repl", "calculation failed", "{calculation:?}: {e}");
                writeln!(output, "An error occurred during calculation: {e}")?;
                writeln!(output, "Please try again.\n")?;
            }
        }
        Ok(())
    }

    fn display_help<W: Write>(&self, output: &mut W) -> io::Result<()> {
        write!(output, "{}", help_text(self.registry))
    }

    fn display_history<W: Write>(&self, output: &mut W) -> io::Result<()> {
        if self.history.is_empty() {
            return writeln!(output, "No calculations performed yet.");
        }

        writeln!(output, "Calculation History:")?;
        for (i, calculation) in self.history.iter().enumerate() {
            // Entries only get here after rendering once, so this cannot fail
            let rendered = calculation
                .render()
                .unwrap_or_else(|e| format!("{calculation:?}: {e}"));
            writeln!(output, "{}. {rendered}", i + 1)?;
        }
        Ok(())
    }
}

/// Help block listing the operations currently registered.
pub fn help_text(registry: &CalculationRegistry) -> String {
    let mut help = String::new();

    help.push_str("\nCalculator REPL Help\n");
    help.push_str("--------------------\n");
    help.push_str("Usage:\n");
    help.push_str("    <operation> <number1> <number2>\n");
    help.push_str("    - Perform a calculation with the specified operation and two numbers.\n");
    help.push_str("    - Supported operations:\n");
    for (name, kind) in registry.entries() {
        help.push_str(&format!("        {name:<10}: {}\n", kind.description()));
    }

    help.push_str("\nSpecial Commands:\n");
    help.push_str("    help      : Display this help message.\n");
    help.push_str("    history   : Show the history of calculations.\n");
    help.push_str("    clear     : Forget the history of calculations.\n");
    help.push_str("    exit      : Exit the calculator.\n");

    help.push_str("\nExamples:\n");
    help.push_str("    add 10 5\n");
    help.push_str("    subtract 15.5 3.2\n");
    help.push_str("    multiply 7 8\n");
    help.push_str("    divide 20 4\n\n");

    help
}
