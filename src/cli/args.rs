//! CLI argument parsing using clap.
//!
//! Contains the Cli struct and the Commands enum.

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Two-operand calculator
#[derive(Parser)]
#[command(
    name = "tally",
    version = env!("CARGO_PKG_VERSION"),
    about = "Two-operand calculator with an interactive REPL",
    long_about = "Evaluate `<operation> <num1> <num2>` interactively or one at a time.",
    after_help = "Examples:\n  tally\n  tally eval add 10 5\n  tally eval divide -1 2.5\n  tally list",
    styles = clap_cargo_style()
)]
pub struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to the REPL)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Start the interactive calculator
    #[command(about = "Start the interactive calculator (default)")]
    Repl,

    /// Evaluate a single calculation
    #[command(
        about = "Evaluate one calculation and print the result",
        allow_negative_numbers = true
    )]
    Eval {
        /// Operation name, e.g. add
        operation: String,

        /// First operand
        #[arg(allow_hyphen_values = true)]
        a: String,

        /// Second operand
        #[arg(allow_hyphen_values = true)]
        b: String,
    },

    /// List registered operations
    #[command(about = "List the available operations")]
    List,

    /// Initialize project
    #[command(about = "Set up .tally directory with default configuration")]
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration settings
    #[command(about = "Display active settings")]
    Config,
}
