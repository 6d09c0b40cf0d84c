//! CLI error types
//!
//! Wraps the library errors so every failure reaches stdout with its
//! stable code.

use std::io;

use thiserror::Error;

use crate::config::ConfigError;
use crate::convert::ConvertError;
use crate::query::QueryError;
use crate::schema::SchemaError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// stdin/stdout failure
    #[error("I/O error: {0}")]
    Io(String),

    /// Input is not the expected JSON document
    #[error("Invalid input: {0}")]
    Input(String),
}

impl CliError {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Config(e) => e.code(),
            CliError::Query(e) => e.code(),
            CliError::Convert(e) => e.code(),
            CliError::Schema(e) => e.code(),
            CliError::Io(_) => "BQS_CLI_IO_ERROR",
            CliError::Input(_) => "BQS_CLI_INVALID_INPUT",
        }
    }

    pub fn input(msg: impl Into<String>) -> Self {
        CliError::Input(msg.into())
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Input(format!("JSON error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_pass_through() {
        let err: CliError = ConfigError::Parse("x".into()).into();
        assert_eq!(err.code(), "BQS_CONFIG_PARSE");

        let err: CliError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert_eq!(err.code(), "BQS_CLI_IO_ERROR");

        let err = CliError::input("empty");
        assert_eq!(err.to_string(), "Invalid input: empty");
    }
}
