//! Hello World - a friendly greeting tool
//!
//! A small command-line program that prints a greeting line to standard
//! output. The recipient and level of detail are configurable through a
//! TOML configuration file or command-line flags.
//!
//! # Quick Start
//!
//! ```bash
//! # Print the default greeting
//! hello-world
//!
//! # Greet someone else
//! hello-world greet --name Ferris
//!
//! # Include host details in the greeting
//! hello-world greet --host
//!
//! # Persist a different recipient
//! hello-world config set greeting.recipient Ferris
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod error;
pub mod greeting;

// Re-export commonly used types
pub use config::{Config, GreetingConfig};
pub use error::{HelloWorldError, Result};
pub use greeting::Greeting;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Render the default greeting line
///
/// Convenience function for library callers who do not need
/// configuration or overrides.
///
/// # Example
///
/// ```
/// assert_eq!(hello_world::greet(), "Hello, World!");
/// ```
pub fn greet() -> String {
    Greeting::default().render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "hello-world");
    }

    #[test]
    fn test_greet() {
        assert_eq!(greet(), "Hello, World!");
    }
}
