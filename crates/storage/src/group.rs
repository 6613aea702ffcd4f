//! Group-and-reduce aggregation primitive
//!
//! Stores reduce a filtered document set into one [`GroupStats`] row per
//! group key. The reduction is fixed: count, access total, public count,
//! type frequencies, earliest `created_at`, latest `updated_at`.

use chrono::{DateTime, Utc};
use docstore_core::{Document, DocumentType};
use std::collections::BTreeMap;

/// Grouping key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    /// One row for the whole matched set
    All,
    /// One row per distinct `session_id`
    Session,
}

impl GroupBy {
    /// Key of a document under this grouping
    pub fn key_of(&self, doc: &Document) -> Option<String> {
        match self {
            GroupBy::All => None,
            GroupBy::Session => Some(doc.session_id.clone()),
        }
    }
}

/// Reduced row
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupStats {
    /// Group key; `None` under [`GroupBy::All`]
    pub key: Option<String>,
    /// Documents in the group
    pub count: u64,
    /// Sum of `access_count`
    pub access_total: u64,
    /// Documents with `is_public == true`
    pub public_count: u64,
    /// Frequency of each document type
    pub type_counts: BTreeMap<DocumentType, u64>,
    /// Minimum `created_at`
    pub first_created: Option<DateTime<Utc>>,
    /// Maximum `updated_at`
    pub last_updated: Option<DateTime<Utc>>,
}

impl GroupStats {
    /// Empty row for a key
    pub fn keyed(key: Option<String>) -> Self {
        GroupStats {
            key,
            ..Default::default()
        }
    }

    /// Fold one document into the row
    pub fn accumulate(&mut self, doc: &Document) {
        self.count += 1;
        self.access_total = self.access_total.saturating_add(doc.access_count);
        if doc.is_public {
            self.public_count += 1;
        }
        *self.type_counts.entry(doc.document_type).or_insert(0) += 1;
        self.first_created = Some(match self.first_created {
            Some(t) => t.min(doc.created_at),
            None => doc.created_at,
        });
        self.last_updated = Some(match self.last_updated {
            Some(t) => t.max(doc.updated_at),
            None => doc.updated_at,
        });
    }
}

/// Reduce documents into rows, ordered by key
pub fn reduce<'a, I>(docs: I, group_by: GroupBy) -> Vec<GroupStats>
where
    I: IntoIterator<Item = &'a Document>,
{
    let mut groups: BTreeMap<Option<String>, GroupStats> = BTreeMap::new();
    for doc in docs {
        let key = group_by.key_of(doc);
        groups
            .entry(key.clone())
            .or_insert_with(|| GroupStats::keyed(key))
            .accumulate(doc);
    }
    groups.into_values().collect()
}
