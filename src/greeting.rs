//! Greeting construction and rendering

use crate::config::GreetingConfig;

/// A fully resolved greeting, ready to render
///
/// Built from the configuration with any CLI overrides already applied.
/// Rendering is pure: the same `Greeting` on the same host always
/// produces the same line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    /// Who the greeting addresses
    pub recipient: String,
    /// Whether to include host architecture and OS details
    pub show_host: bool,
}

impl Greeting {
    /// Build a greeting from configuration
    pub fn from_config(config: &GreetingConfig) -> Self {
        Self {
            recipient: config.recipient.clone(),
            show_host: config.show_host,
        }
    }

    /// Override the recipient
    pub fn with_recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = recipient.into();
        self
    }

    /// Enable host details
    pub fn with_host_details(mut self) -> Self {
        self.show_host = true;
        self
    }

    /// Render the greeting line
    pub fn render(&self) -> String {
        if self.show_host {
            format!(
                "Hello from {} on {} ({} {}).",
                std::env::consts::ARCH,
                std::env::consts::OS,
                crate::NAME,
                crate::VERSION,
            )
        } else {
            format!("Hello, {}!", self.recipient)
        }
    }
}

impl Default for Greeting {
    fn default() -> Self {
        Self::from_config(&GreetingConfig::default())
    }
}
