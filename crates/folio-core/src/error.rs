//! Error types for the Folio core library.

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types for Folio.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration loading or validation error.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Content entry metadata error with the owning collection.
    #[error("Entry error in {collection}: {message}")]
    Entry {
        collection: String,
        message: String,
    },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl CoreError {
    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new entry error for a collection.
    pub fn entry(collection: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Entry {
            collection: collection.into(),
            message: message.into(),
        }
    }
}
