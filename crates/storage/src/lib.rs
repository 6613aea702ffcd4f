//! Storage layer for the document repository
//!
//! This crate defines what the repository asks of a store, and ships one
//! store that answers it:
//! - DocumentStore: async store contract (insert, find, update, delete, aggregate)
//! - Filter / Clause: project-scoped structured predicates
//! - Update / Assignment: field sets plus atomic access increments
//! - FindOptions / Sort: ordering and pagination
//! - GroupBy / GroupStats: group-and-reduce aggregation
//! - MemoryStore: project-partitioned in-memory implementation

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod filter;
pub mod group;
pub mod memory;
pub mod options;
pub mod store;
pub mod update;

pub use filter::{flatten_content, Clause, Filter, TextPattern, TimeRange};
pub use group::{reduce, GroupBy, GroupStats};
pub use memory::MemoryStore;
pub use options::{FindOptions, Sort, SortField, SortOrder};
pub use store::{DocumentStore, StoreError, StoreResult};
pub use update::{Assignment, Update};
