//! Error type shared by the simulation, rendering and configuration layers.

use thiserror::Error;

/// Result alias for gravsim operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Invalid scenario: bad dimensions, masses, frame count or body records.
    /// Always raised before any simulation or render work starts.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Vector divided by a zero scalar
    #[error("division by zero")]
    DivisionByZero,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Shorthand for a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}
