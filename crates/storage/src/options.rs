//! Sort and pagination options for multi-document reads

use docstore_core::{Document, Error, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Field a result set can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// Creation time
    CreatedAt,
    /// Last mutation time
    #[default]
    UpdatedAt,
    /// Document name
    Name,
    /// Access count
    AccessCount,
    /// Document type wire value
    DocumentType,
    /// Last access-counted read; documents never accessed sort first
    LastAccessedAt,
}

impl SortField {
    /// Every sortable field
    pub const ALL: [SortField; 6] = [
        SortField::CreatedAt,
        SortField::UpdatedAt,
        SortField::Name,
        SortField::AccessCount,
        SortField::DocumentType,
        SortField::LastAccessedAt,
    ];

    /// Wire name
    pub const fn as_str(&self) -> &'static str {
        match self {
            SortField::CreatedAt => "created_at",
            SortField::UpdatedAt => "updated_at",
            SortField::Name => "name",
            SortField::AccessCount => "access_count",
            SortField::DocumentType => "document_type",
            SortField::LastAccessedAt => "last_accessed_at",
        }
    }

    /// Compare two documents on this field, ascending
    pub fn compare(&self, a: &Document, b: &Document) -> Ordering {
        match self {
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            SortField::Name => a.name.cmp(&b.name),
            SortField::AccessCount => a.access_count.cmp(&b.access_count),
            SortField::DocumentType => a.document_type.as_str().cmp(b.document_type.as_str()),
            SortField::LastAccessedAt => a.last_accessed_at.cmp(&b.last_accessed_at),
        }
    }
}

impl FromStr for SortField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SortField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| Error::validation(format!("unsupported sort field: {:?}", s)))
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Smallest first
    #[serde(alias = "asc")]
    Ascending,
    /// Largest first
    #[default]
    #[serde(alias = "desc")]
    Descending,
}

/// Field plus direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sort {
    /// Field to order by
    pub field: SortField,
    /// Direction
    pub order: SortOrder,
}

impl Sort {
    /// Build a sort
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Sort { field, order }
    }

    /// Compare two documents; ties break on id so pages are deterministic
    pub fn compare(&self, a: &Document, b: &Document) -> Ordering {
        let primary = match self.order {
            SortOrder::Ascending => self.field.compare(a, b),
            SortOrder::Descending => self.field.compare(b, a),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}

/// Sort, skip and limit for `find_many`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FindOptions {
    /// Ordering applied before pagination
    pub sort: Option<Sort>,
    /// Matching documents to skip
    pub skip: usize,
    /// Maximum documents to return; `None` returns all
    pub limit: Option<usize>,
}

impl FindOptions {
    /// Sorted, unpaginated
    pub fn sorted(sort: Sort) -> Self {
        FindOptions {
            sort: Some(sort),
            ..Default::default()
        }
    }

    /// Set pagination
    pub fn page(mut self, skip: usize, limit: usize) -> Self {
        self.skip = skip;
        self.limit = Some(limit);
        self
    }

    /// Sort, skip and truncate an already-filtered result set
    pub fn apply(&self, mut docs: Vec<Document>) -> Vec<Document> {
        if let Some(sort) = &self.sort {
            docs.sort_by(|a, b| sort.compare(a, b));
        }
        let iter = docs.into_iter().skip(self.skip);
        match self.limit {
            Some(limit) => iter.take(limit).collect(),
            None => iter.collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_field_from_str() {
        for f in SortField::ALL {
            assert_eq!(f.as_str().parse::<SortField>().unwrap(), f);
        }
        let err = "content".parse::<SortField>().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_sort_order_aliases() {
        assert_eq!(serde_json::from_str::<SortOrder>("\"asc\"").unwrap(), SortOrder::Ascending);
        assert_eq!(serde_json::from_str::<SortOrder>("\"descending\"").unwrap(), SortOrder::Descending);
    }

    #[test]
    fn test_defaults() {
        let sort = Sort::default();
        assert_eq!(sort.field, SortField::UpdatedAt);
        assert_eq!(sort.order, SortOrder::Descending);
    }
}
