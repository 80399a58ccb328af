//! Interactive REPL command.

use std::io;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;

use crate::calculation::CalculationRegistry;
use crate::config::Settings;
use crate::debug_event;
use crate::repl::{Lines, Repl, Terminal};

/// Run the REPL until `exit`, end of input or Ctrl-C.
///
/// A terminal on stdin gets the line editor; piped input is read as plain lines.
pub fn run_repl(registry: &CalculationRegistry, settings: &Settings) -> Result<()> {
    let mut repl = Repl::new(registry, settings.repl.clone());
    let stdout = io::stdout();

    let exit = if io::stdin().is_terminal() {
        let mut terminal = Terminal::new().context("Failed to initialize line editor")?;
        repl.run_with(&mut terminal, stdout)
    } else {
        repl.run_with(&mut Lines(io::stdin().lock()), stdout)
    }
    .context("REPL terminal I/O failed")?;

    debug_event!(
        "cli",
        "repl finished",
        "{exit:?} after {} calculation(s)",
        repl.history().len()
    );
    Ok(())
}
