//! Error types for the KBChat core.

use thiserror::Error;

/// A shared error type for the KBChat library crates.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug)]
pub enum KbChatError {
    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Data access error (repository/storage layer)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error (paths, platform directories)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for KbChatError {
    fn from(e: std::io::Error) -> Self {
        KbChatError::Io {
            message: e.to_string(),
        }
    }
}

/// Convenience result type used across the KBChat crates.
pub type Result<T> = std::result::Result<T, KbChatError>;
