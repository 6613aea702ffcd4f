//! Field updates applied by the store
//!
//! An [`Update`] is a set of field assignments plus an optional access-count
//! increment. Stores must apply the whole update to a document atomically;
//! the increment in particular is a store-side add, never a caller-side
//! read-modify-write.

use chrono::{DateTime, Utc};
use docstore_core::{Document, DocumentType};

/// A single field assignment
#[derive(Debug, Clone, PartialEq)]
pub enum Assignment {
    /// Replace the tag list
    Tags(Vec<String>),
    /// Replace the document type
    Type(DocumentType),
    /// Replace the visibility flag
    Public(bool),
    /// Set `updated_at`
    UpdatedAt(DateTime<Utc>),
    /// Set `updated_by`
    UpdatedBy(String),
    /// Set `last_accessed_at`
    LastAccessedAt(DateTime<Utc>),
}

impl Assignment {
    /// Apply to a document, reporting whether the field changed
    fn apply(&self, doc: &mut Document) -> bool {
        fn set<T: PartialEq>(slot: &mut T, value: T) -> bool {
            if *slot == value {
                return false;
            }
            *slot = value;
            true
        }

        match self {
            Assignment::Tags(tags) => set(&mut doc.tags, tags.clone()),
            Assignment::Type(t) => set(&mut doc.document_type, *t),
            Assignment::Public(flag) => set(&mut doc.is_public, *flag),
            Assignment::UpdatedAt(t) => set(&mut doc.updated_at, *t),
            Assignment::UpdatedBy(actor) => set(&mut doc.updated_by, actor.clone()),
            Assignment::LastAccessedAt(t) => set(&mut doc.last_accessed_at, Some(*t)),
        }
    }
}

/// Assignments plus an access-count increment
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Update {
    assignments: Vec<Assignment>,
    access_increment: u64,
}

impl Update {
    /// Empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one access-counted read at `now`
    pub fn record_access(now: DateTime<Utc>) -> Self {
        Update::new()
            .increment_access(1)
            .set(Assignment::LastAccessedAt(now))
    }

    /// Add a field assignment
    pub fn set(mut self, assignment: Assignment) -> Self {
        self.assignments.push(assignment);
        self
    }

    /// Refresh the audit fields
    pub fn touch(self, now: DateTime<Utc>, actor: impl Into<String>) -> Self {
        self.set(Assignment::UpdatedAt(now))
            .set(Assignment::UpdatedBy(actor.into()))
    }

    /// Add to `access_count`
    pub fn increment_access(mut self, by: u64) -> Self {
        self.access_increment = self.access_increment.saturating_add(by);
        self
    }

    /// Field assignments
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Access-count increment
    pub fn access_increment(&self) -> u64 {
        self.access_increment
    }

    /// Apply to a document in place
    ///
    /// Returns true if any field actually changed, which is what stores
    /// report as "modified".
    pub fn apply(&self, doc: &mut Document) -> bool {
        let mut changed = false;
        for assignment in &self.assignments {
            changed |= assignment.apply(doc);
        }
        if self.access_increment > 0 {
            doc.access_count = doc.access_count.saturating_add(self.access_increment);
            changed = true;
        }
        changed
    }
}
