use clap::Parser;
use tally::cli::commands::{eval, init, repl};
use tally::cli::{Cli, Commands};
use tally::{CalculationRegistry, Settings, debug_event, logging};

fn main() {
    let cli = Cli::parse();

    // Init must work without a readable configuration
    if let Some(Commands::Init { force }) = cli.command {
        exit_on_error(init::run_init(force));
        return;
    }

    if cli.config.is_none() && matches!(cli.command, Some(Commands::Config)) {
        if let Err(warning) = Settings::check_init() {
            eprintln!("Warning: {warning}");
        }
    }

    let loaded = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    let settings = loaded.unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        eprintln!("Using default configuration for now.");
        Settings::default()
    });

    logging::init_with_config(&settings.logging);

    let registry = CalculationRegistry::with_builtins();
    debug_event!("cli", "registry ready", "{} operations", registry.len());

    let result = match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => repl::run_repl(&registry, &settings),
        Commands::Eval { operation, a, b } => eval::run_eval(&registry, &operation, &a, &b),
        Commands::List => eval::run_list(&registry),
        Commands::Config => init::run_config(&settings),
        Commands::Init { .. } => unreachable!("handled before settings load"),
    };
    exit_on_error(result);
}

fn exit_on_error(result: anyhow::Result<()>) {
    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
