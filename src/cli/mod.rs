//! Command-line interface for hello-world

mod commands;

pub use commands::*;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Hello World - a friendly greeting tool
///
/// Prints a greeting line to standard output. Invoked with no
/// arguments it prints the configured greeting and exits.
#[derive(Parser, Debug)]
#[command(name = "hello-world")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute (defaults to `greet`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "HELLO_WORLD_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a greeting (the default when no command is given)
    Greet(GreetArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Arguments for the greet command
#[derive(Parser, Debug, Clone, Default)]
pub struct GreetArgs {
    /// Who to greet (overrides the configured recipient)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Include host architecture and OS in the greeting
    #[arg(long)]
    pub host: bool,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Configuration subcommand
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Reset configuration to defaults
    Reset,
    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
