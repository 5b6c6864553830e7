//! Command execution handlers

use std::path::Path;

use tracing::debug;

use crate::config::Config;
use crate::error::{HelloWorldError, Result};
use crate::greeting::Greeting;

/// Execute the greet command
pub fn execute_greet(args: &super::GreetArgs, config: &Config) -> Result<()> {
    let mut greeting = Greeting::from_config(&config.greeting);

    if let Some(ref name) = args.name {
        greeting = greeting.with_recipient(name);
    }
    if args.host {
        greeting = greeting.with_host_details();
    }

    debug!(recipient = %greeting.recipient, host = greeting.show_host, "rendering greeting");

    println!("{}", greeting.render());

    Ok(())
}

/// Execute the config command
///
/// `config_path` is the `--config` override; all reads and writes go
/// through the same resolved path the greet command reads from.
pub fn execute_config(args: &super::ConfigArgs, config_path: Option<&Path>) -> Result<()> {
    let path = match config_path {
        Some(p) => p.to_path_buf(),
        None => Config::config_path()?,
    };

    match &args.command {
        super::ConfigCommands::Show => {
            let config = Config::load_from(&path)?;
            println!(
                "{}",
                toml::to_string_pretty(&config)
                    .map_err(|e| HelloWorldError::Other(e.to_string()))?
            );
        }
        super::ConfigCommands::Reset => {
            Config::reset(&path)?;
            println!("Configuration reset to defaults");
        }
        super::ConfigCommands::Set { key, value } => {
            let mut config = Config::load_from(&path)?;
            config.set(key, value)?;
            config.save_to(&path)?;
            println!("Set {} = {}", key, value);
        }
        super::ConfigCommands::Get { key } => {
            let config = Config::load_from(&path)?;
            if let Some(value) = config.get(key) {
                println!("{}", value);
            } else {
                println!("Key '{}' not found", key);
            }
        }
        super::ConfigCommands::Init { force } => {
            Config::init(&path, *force)?;
            println!("Configuration initialized");
        }
    }

    Ok(())
}
