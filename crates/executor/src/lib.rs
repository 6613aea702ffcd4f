//! # Docstore Executor
//!
//! The public API for docstore, a multi-tenant JSON document repository.
//!
//! This is the only crate users need to import. It provides:
//! - [`Executor`] - executes [`Command`]s and returns a [`Response`]
//! - [`Command`]/[`Output`] - the serializable command interface (for transports)
//! - [`DocumentRepository`] - the typed async API underneath
//!
//! ## Quick Start
//!
//! ```text
//! use docstore_executor::{Command, DocumentInput, Executor};
//! use serde_json::json;
//!
//! let executor = Executor::in_memory();
//!
//! let created = executor.execute(Command::DocumentCreate {
//!     project: "acme".into(),
//!     document: DocumentInput::new("plan", "session-1", json!({"steps": []})),
//!     created_by: Some("alice".into()),
//! }).await;
//! assert!(created.is_success());
//! ```
//!
//! ## Tenancy
//!
//! Every command names a project. Documents in one project are invisible to
//! every other project: reads report not found, queries and statistics skip
//! them, and batch operations never touch them.

#![warn(missing_docs)]

mod command;
mod executor;
mod handlers;
mod output;
mod response;

// Test modules
#[cfg(test)]
mod tests;

pub use command::Command;
pub use executor::Executor;
pub use output::Output;
pub use response::{Response, Status};

// Re-export the typed API so users don't need the lower crates directly
pub use docstore_core::{
    Document, DocumentId, DocumentInput, DocumentType, Error, ErrorKind, ProjectId,
};
pub use docstore_engine::{
    BatchReport, BatchRequest, DocumentQuery, DocumentRepository, DocumentStatistics,
    DocumentTypeInfo, JsonSchemaValidator, RepositoryConfig, SchemaCheck, SchemaValidator,
    SessionDeletion, SessionList, SessionQuery, SessionSummary,
};
pub use docstore_storage::{DocumentStore, MemoryStore, SortField, SortOrder};

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
