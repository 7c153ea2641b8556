mod cli;
mod error;
mod fetch;
mod init;
mod progress;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let verbose = matches!(cli.command, Commands::Fetch { verbose: true, .. });
    init_tracing(verbose);

    let result = match cli.command {
        Commands::Fetch {
            path,
            method,
            data,
            headers,
            query,
            config,
            no_progress,
            verbose,
        } => fetch::execute(fetch::FetchArgs {
            path,
            method,
            data,
            headers,
            query,
            config_path: config,
            no_progress,
            verbose,
        }),
        Commands::Init { config, force } => init::execute(&config, force),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}

/// Log to stderr; RUST_LOG wins over the verbose flag
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
