//! Hello World - a friendly greeting tool
//!
//! Main entry point for the hello-world CLI application.

use std::process::ExitCode;

use anyhow::{Context, Result};
use console::style;
use tracing_subscriber::EnvFilter;

use hello_world::cli::{self, Cli, Commands, GreetArgs};
use hello_world::config::Config;

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Load configuration before logging so the configured level applies
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {:#}", style("Error:").red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    // Set up logging
    setup_logging(&cli, &config);

    // Run the application
    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", style("Error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Load configuration, honoring the global `--config` override
fn load_config(cli: &Cli) -> Result<Config> {
    match cli.config {
        Some(ref path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Config::load().context("failed to load config"),
    }
}

/// Resolve the log level: CLI flags win over the configured level
fn log_level(cli: &Cli, config: &Config) -> String {
    if cli.verbose {
        "debug".to_string()
    } else if cli.quiet {
        "error".to_string()
    } else {
        config.logging.level.clone()
    }
}

/// Set up logging based on CLI arguments and configuration
fn setup_logging(cli: &Cli, config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(cli, config)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.logging.color)
        .with_target(false)
        .without_time()
        .init();
}

/// Main application logic
fn run(cli: Cli, config: &Config) -> Result<()> {
    let Cli {
        command,
        config: config_path,
        ..
    } = cli;

    // A bare invocation greets with no overrides
    match command {
        Some(Commands::Greet(args)) => cli::execute_greet(&args, config)?,
        Some(Commands::Config(args)) => cli::execute_config(&args, config_path.as_deref())?,
        None => cli::execute_greet(&GreetArgs::default(), config)?,
    }

    Ok(())
}
