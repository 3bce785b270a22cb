//! primelist - prime number generator and primality checker
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use primelist::cli::{Cli, Commands};
use primelist::config::{Config, ConfigManager};
use primelist::error::PrimeListResult;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> PrimeListResult<()> {
    let cli = Cli::parse();

    let config_manager = ConfigManager::resolve(cli.config.clone());
    let config = config_manager.load().await?;

    init_logging(cli.verbose, &config);
    debug!("Using config at {}", config_manager.path().display());

    match cli.command {
        Commands::First(args) => primelist::cli::commands::first(args, &config),
        Commands::Upto(args) => primelist::cli::commands::upto(args, &config),
        Commands::Nth(args) => primelist::cli::commands::nth(args, &config),
        Commands::Next(args) => primelist::cli::commands::next(args, &config),
        Commands::Check(args) => primelist::cli::commands::check(args, &config),
        Commands::Config(args) => {
            primelist::cli::commands::config(args, &config, &config_manager).await
        }
    }
}

/// Initialize logging: 0 = warn, 1 = info, 2+ = debug
fn init_logging(verbose: u8, config: &Config) {
    let filter = match verbose {
        0 => EnvFilter::new("primelist=warn"),
        1 => EnvFilter::new("primelist=info"),
        _ => EnvFilter::new("primelist=debug"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    if config.general.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
