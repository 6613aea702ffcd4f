//! Docstore - multi-tenant JSON document repository for AI agents
//!
//! Docstore stores JSON documents produced by agents, grouped by project
//! (the tenant boundary) and by session. It supports structured queries,
//! content search, batch mutations, access tracking, statistics and optional
//! JSON Schema validation.
//!
//! # Quick Start
//!
//! ```ignore
//! use docstore::{Command, DocumentInput, Executor};
//! use serde_json::json;
//!
//! let executor = Executor::in_memory();
//! let response = executor
//!     .execute(Command::DocumentCreate {
//!         project: "acme".into(),
//!         document: DocumentInput::new("plan", "session-1", json!({"steps": []})),
//!         created_by: None,
//!     })
//!     .await;
//! assert!(response.is_success());
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Executor`], which dispatches a
//! [`Command`] to the [`DocumentRepository`] and folds the outcome into a
//! [`Response`]. Storage sits behind the async [`DocumentStore`] trait;
//! [`MemoryStore`] is the bundled implementation.

// Re-export the public API from docstore-executor
pub use docstore_executor::*;
