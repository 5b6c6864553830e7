//! Error types for hello-world

use thiserror::Error;

/// Main error type for hello-world operations
#[derive(Error, Debug)]
pub enum HelloWorldError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for hello-world operations
pub type Result<T> = std::result::Result<T, HelloWorldError>;

impl HelloWorldError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
