//! Uniform response envelope.
//!
//! Every executed command yields a [`Response`]: a status category, a
//! human-readable message and, on success, the command's [`Output`].

use docstore_core::{Error, ErrorKind};
use serde::{Deserialize, Serialize};

use crate::Output;

/// Outcome category of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// The command succeeded
    Success,
    /// Caller input was rejected
    ValidationError,
    /// The target does not exist for this project
    NotFound,
    /// The store or an invariant failed
    InternalError,
}

impl From<ErrorKind> for Status {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Validation => Status::ValidationError,
            ErrorKind::NotFound => Status::NotFound,
            ErrorKind::Internal => Status::InternalError,
        }
    }
}

/// Result envelope returned by [`Executor::execute`](crate::Executor::execute)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Outcome category
    pub status: Status,
    /// Display message
    pub message: String,
    /// Payload, present only on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Output>,
}

impl Response {
    /// Successful response carrying `output`
    pub fn success(message: impl Into<String>, output: Output) -> Self {
        Response {
            status: Status::Success,
            message: message.into(),
            data: Some(output),
        }
    }

    /// Failure response for `error`
    pub fn from_error(error: &Error) -> Self {
        Response {
            status: error.kind().into(),
            message: error.to_string(),
            data: None,
        }
    }

    /// True if the command succeeded
    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}
