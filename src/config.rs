//! Configuration management for hello-world

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{HelloWorldError, Result};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Greeting settings
    #[serde(default)]
    pub greeting: GreetingConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Greeting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreetingConfig {
    /// Who to greet
    pub recipient: String,
    /// Include host architecture and OS in the greeting
    pub show_host: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
    /// Enable colored output
    pub color: bool,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            recipient: "World".to_string(),
            show_host: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            color: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            greeting: GreetingConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| HelloWorldError::config("Could not find config directory"))?;
        Ok(config_dir.join("hello-world").join("config.toml"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file
    ///
    /// A missing file yields the default configuration; a malformed
    /// file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| HelloWorldError::config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Reset the configuration file at `path` to defaults
    pub fn reset(path: &Path) -> Result<()> {
        let config = Self::default();
        config.save_to(path)
    }

    /// Initialize the configuration file at `path`
    pub fn init(path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            return Err(HelloWorldError::config(
                "Configuration file already exists. Use --force to overwrite.",
            ));
        }

        let config = Self::default();
        config.save_to(path)
    }

    /// Get a configuration value by key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "greeting.recipient" => Some(self.greeting.recipient.clone()),
            "greeting.show_host" => Some(self.greeting.show_host.to_string()),

            "logging.level" => Some(self.logging.level.clone()),
            "logging.color" => Some(self.logging.color.to_string()),

            _ => None,
        }
    }

    /// Set a configuration value by key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "greeting.recipient" => {
                if value.is_empty() {
                    return Err(HelloWorldError::config(
                        "greeting.recipient must not be empty",
                    ));
                }
                self.greeting.recipient = value.to_string();
            }
            "greeting.show_host" => {
                self.greeting.show_host = value
                    .parse()
                    .map_err(|_| HelloWorldError::config("Invalid boolean for show_host"))?;
            }

            "logging.level" => {
                self.logging.level = value.to_string();
            }
            "logging.color" => {
                self.logging.color = value
                    .parse()
                    .map_err(|_| HelloWorldError::config("Invalid boolean for color"))?;
            }

            _ => {
                return Err(HelloWorldError::UnknownKey(key.to_string()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.greeting.recipient, "World");
        assert!(!config.greeting.show_host);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_get_set() {
        let mut config = Config::default();

        config.set("greeting.recipient", "Rustaceans").unwrap();
        assert_eq!(
            config.get("greeting.recipient"),
            Some("Rustaceans".to_string())
        );

        config.set("greeting.show_host", "true").unwrap();
        assert_eq!(config.get("greeting.show_host"), Some("true".to_string()));
    }

    #[test]
    fn test_set_rejects_unknown_key() {
        let mut config = Config::default();
        let err = config.set("greeting.bogus", "x").unwrap_err();
        assert!(matches!(err, HelloWorldError::UnknownKey(_)));
    }

    #[test]
    fn test_set_rejects_empty_recipient() {
        let mut config = Config::default();
        assert!(config.set("greeting.recipient", "").is_err());
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.greeting.recipient, "World");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.set("greeting.recipient", "Ferris").unwrap();
        config.set("greeting.show_host", "true").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.greeting.recipient, "Ferris");
        assert!(loaded.greeting.show_host);
    }

    #[test]
    fn test_init_refuses_existing_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        Config::init(&path, false).unwrap();
        assert!(Config::init(&path, false).is_err());
        assert!(Config::init(&path, true).is_ok());
    }

    #[test]
    fn test_reset_overwrites_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.set("greeting.recipient", "Ferris").unwrap();
        config.save_to(&path).unwrap();

        Config::reset(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.greeting.recipient, "World");
    }

    #[test]
    fn test_load_from_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "greeting = not valid toml [").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(HelloWorldError::Toml(_))
        ));
    }
}
