//! The document store contract
//!
//! The repository never talks to a database directly. It issues the calls
//! below against an explicit `Arc<dyn DocumentStore>` handle, and every call
//! is a suspension point.
//!
//! ## Atomicity
//!
//! | Call | Guarantee |
//! |------|-----------|
//! | `insert`, `find_one_and_update`, `delete_one` | Atomic per document |
//! | `update_many`, `delete_many` | Best effort; may stop part-way, count reflects what was applied |
//! | `aggregate` | Single store-side reduction |

use async_trait::async_trait;
use docstore_core::{Document, DocumentDraft};
use thiserror::Error;

use crate::filter::Filter;
use crate::group::{GroupBy, GroupStats};
use crate::options::FindOptions;
use crate::update::Update;

/// Result type for store calls
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Store-level failures
///
/// The repository wraps all of these as internal errors with context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Backend cannot serve the request
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A stored record could not be encoded or decoded
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Write collided with existing data
    #[error("conflict: {0}")]
    Conflict(String),
}

/// Operations the repository consumes from its store
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persist a draft, assigning its id
    async fn insert(&self, draft: DocumentDraft) -> StoreResult<Document>;

    /// First document matching the filter
    async fn find_one(&self, filter: &Filter) -> StoreResult<Option<Document>>;

    /// All matching documents, sorted then paginated
    async fn find_many(&self, filter: &Filter, options: &FindOptions) -> StoreResult<Vec<Document>>;

    /// Atomically update the first match and return its post-update state
    async fn find_one_and_update(
        &self,
        filter: &Filter,
        update: &Update,
    ) -> StoreResult<Option<Document>>;

    /// Update every match; returns the number actually modified
    async fn update_many(&self, filter: &Filter, update: &Update) -> StoreResult<u64>;

    /// Remove the first match; returns whether anything was removed
    async fn delete_one(&self, filter: &Filter) -> StoreResult<bool>;

    /// Remove every match; returns the number removed
    async fn delete_many(&self, filter: &Filter) -> StoreResult<u64>;

    /// Reduce the matched set into one row per group
    async fn aggregate(&self, filter: &Filter, group_by: GroupBy) -> StoreResult<Vec<GroupStats>>;
}
