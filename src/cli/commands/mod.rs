//! Command implementations for the CLI.
//!
//! Each command is implemented in its own module.

pub mod eval;
pub mod init;
pub mod repl;
