//! Error types for greetkit
//!
//! The core functions only ever fail with [`GreetkitError::InvalidArgument`].

use thiserror::Error;

/// Main error type for greetkit
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GreetkitError {
    /// A precondition on function input was violated
    #[error("{message}")]
    InvalidArgument { message: String },
}

impl GreetkitError {
    /// Create a new invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Whether this error signals a precondition violation
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, GreetkitError>;
