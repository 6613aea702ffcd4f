//! Document repository engine
//!
//! This crate turns the storage contract into tenant-scoped document
//! operations:
//! - DocumentRepository: create, read, delete, list, search, sessions
//! - QueryCompiler: structured queries to project-scoped store predicates
//! - Batch executor: one mutation over a caller-specified document set
//! - Statistics: project, session and session-list aggregates
//! - SchemaValidator: JSON Schema checks at creation and on demand
//! - RepositoryConfig: `docstore.toml` settings
//!
//! The engine holds no global state. A repository owns an explicit
//! `Arc<dyn DocumentStore>` handle and every suspension point is a store call.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod batch;
pub mod config;
mod convert;
pub mod query;
pub mod repository;
pub mod schema;
pub mod stats;

pub use batch::{parse_ids, BatchOperation, BatchReport, BatchRequest};
pub use config::{RepositoryConfig, CONFIG_FILE_NAME};
pub use query::{session_filter, CompiledQuery, DocumentQuery, QueryCompiler, SessionQuery};
pub use repository::{DocumentRepository, DocumentTypeInfo, SessionDeletion};
pub use schema::{JsonSchemaValidator, SchemaCheck, SchemaError, SchemaValidator};
pub use stats::{DocumentStatistics, SessionList, SessionSummary};
