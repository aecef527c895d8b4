//! Core error types

use std::fmt;
use thiserror::Error;

/// Status reported by the collation engine for a failed call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineStatus {
    /// Raw ICU error code (always greater than `U_ZERO_ERROR` for failures)
    pub code: i32,
    /// Symbolic ICU name of the code, e.g. `U_ILLEGAL_ARGUMENT_ERROR`
    pub name: String,
}

impl fmt::Display for EngineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

/// Collation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollationError {
    /// Argument outside a closed symbolic domain, or otherwise unusable.
    /// Raised before the engine is called.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The engine has no collator for the requested locale
    #[error("locale '{locale}' not supported: {status}")]
    LocaleUnsupported {
        /// The rejected locale identifier
        locale: String,
        /// Engine status
        status: EngineStatus,
    },

    /// Rule text could not be compiled by the engine
    #[error("invalid collation rules at line {line}, offset {offset}: {status}")]
    InvalidRules {
        /// Line of the parse failure as reported by the engine
        line: i32,
        /// Offset of the parse failure within the line
        offset: i32,
        /// Engine status
        status: EngineStatus,
    },

    /// Any other failed engine call
    #[error("{operation} failed: {status}")]
    Engine {
        /// Name of the engine function that failed
        operation: &'static str,
        /// Engine status
        status: EngineStatus,
    },

    /// The engine returned an attribute value code outside the registry
    #[error("unknown attribute value code {0}")]
    UnknownValueCode(i32),
}

impl CollationError {
    /// Engine status attached to this error, if it came from the engine
    pub fn status(&self) -> Option<&EngineStatus> {
        match self {
            CollationError::LocaleUnsupported { status, .. }
            | CollationError::InvalidRules { status, .. }
            | CollationError::Engine { status, .. } => Some(status),
            CollationError::InvalidArgument(_) | CollationError::UnknownValueCode(_) => None,
        }
    }
}

/// Result type for collation operations
pub type Result<T> = std::result::Result<T, CollationError>;
