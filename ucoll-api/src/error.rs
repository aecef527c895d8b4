//! API error types

use std::string::FromUtf8Error;
use thiserror::Error;
use ucoll_core::CollationError;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Collation error
    #[error("collation error: {0}")]
    Collation(#[from] CollationError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 conversion error
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// TOML parse error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl ApiError {
    /// Whether the error is an invalid-argument rejection raised before the engine was called
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ApiError::Collation(CollationError::InvalidArgument(_)))
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
