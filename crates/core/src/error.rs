//! Error types for watchterm-core

use thiserror::Error;

/// Core error type
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid layout configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Unknown icon: {0}")]
    UnknownIcon(String),

    #[error("Unknown key name: {0}")]
    UnknownKey(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, CoreError>;
