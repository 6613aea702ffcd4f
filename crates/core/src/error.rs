//! Error types for the document repository
//!
//! Every repository operation reports failure through one of three categories:
//!
//! | Kind | Meaning | Caller action |
//! |------|---------|---------------|
//! | `Validation` | Malformed id, bad schema, unknown operation, invalid enum value | Fix the input |
//! | `NotFound` | Document absent, or owned by another project | None |
//! | `Internal` | Store or infrastructure failure, wrapped with context | Retry or report |
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::limits::LimitError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for repository operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error category, used by the transport surface to pick a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Input rejected before or instead of touching the store
    Validation,
    /// Target does not exist within the caller's project
    NotFound,
    /// Store or infrastructure failure
    Internal,
}

/// Error types for the document repository
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Caller input is malformed or violates a contract rule
    #[error("invalid input: {reason}")]
    Validation {
        /// Human-readable description of the offending rule
        reason: String,
    },

    /// Target document does not exist in the caller's project
    #[error("not found: {what}")]
    NotFound {
        /// Description of what was looked up
        what: String,
    },

    /// Store or infrastructure failure
    #[error("internal error: {reason}")]
    Internal {
        /// Context plus the underlying cause
        reason: String,
    },
}

impl Error {
    /// Build a validation error
    pub fn validation(reason: impl Into<String>) -> Self {
        Error::Validation {
            reason: reason.into(),
        }
    }

    /// Build a not-found error
    pub fn not_found(what: impl Into<String>) -> Self {
        Error::NotFound { what: what.into() }
    }

    /// Build an internal error
    pub fn internal(reason: impl Into<String>) -> Self {
        Error::Internal {
            reason: reason.into(),
        }
    }

    /// The category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation { .. } => ErrorKind::Validation,
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::Internal { .. } => ErrorKind::Internal,
        }
    }

    /// True for input errors the caller can correct
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    /// True when the target was absent
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

impl From<LimitError> for Error {
    fn from(e: LimitError) -> Self {
        Error::validation(e.to_string())
    }
}
