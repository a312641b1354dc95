//! Error types for the account directory
//!
//! This module provides a unified error handling system shared by the
//! directory service and the HTTP gateway. Every request-level failure maps
//! to exactly one of these variants before it reaches a response.

use thiserror::Error;

/// Account directory error type
#[derive(Debug, Error)]
pub enum Error {
    /// Error when an account cannot be found
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// Error when a supplied field fails validation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Convert string messages into an error
impl From<String> for Error {
    fn from(message: String) -> Self {
        Error::Internal(message)
    }
}

/// Convert static string references into an error
impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Error::Internal(message.to_string())
    }
}
