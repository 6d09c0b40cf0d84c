//! Configuration error types

use thiserror::Error;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("Failed to read config '{path}': {reason}")]
    Read { path: String, reason: String },

    /// File is not valid configuration JSON
    #[error("Invalid config JSON: {0}")]
    Parse(String),

    /// A field holds a value outside its allowed range
    #[error("Invalid config value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::Read { .. } => "BQS_CONFIG_READ",
            ConfigError::Parse(_) => "BQS_CONFIG_PARSE",
            ConfigError::Invalid { .. } => "BQS_CONFIG_INVALID",
        }
    }
}
