//! Core types for the document repository
//!
//! This crate defines the foundational types used throughout the system:
//! - ProjectId: Tenant key scoping every operation
//! - DocumentId: Store-assigned identifier, validated before any lookup
//! - DocumentType: Closed document classification
//! - Document / DocumentDraft / DocumentInput: The document model
//! - Limits: Field bounds and tag normalization
//! - Error: Validation / NotFound / Internal taxonomy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod error;
pub mod limits;
pub mod types;

pub use document::{Document, DocumentDraft, DocumentInput, DEFAULT_ACTOR};
pub use error::{Error, ErrorKind, Result};
pub use limits::{
    normalize_tags, LimitError, Limits, MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH, MAX_PAGE_SIZE,
    MAX_SESSION_ID_LENGTH, MAX_TAGS,
};
pub use types::{DocumentId, DocumentType, ProjectId};
