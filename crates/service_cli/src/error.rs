//! CLI error types

use thiserror::Error;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// JSON serialisation error
    #[error("Serialisation error: {0}")]
    Serialise(#[from] serde_json::Error),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
