//! Query Compiler: structured requests to store predicates
//!
//! Compilation is pure. It validates the request, escapes every
//! caller-supplied pattern, and produces a [`CompiledQuery`] that always
//! carries the caller's project scope. No store is touched here.

use chrono::{DateTime, Utc};
use docstore_core::{normalize_tags, DocumentType, Error, Limits, ProjectId, Result};
use docstore_storage::{
    Clause, Filter, FindOptions, Sort, SortField, SortOrder, TextPattern, TimeRange,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Filter, sort and pagination request for `list`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentQuery {
    /// Case-insensitive substring of the name
    pub name_pattern: Option<String>,
    /// Exact document type
    pub document_type: Option<DocumentType>,
    /// Exact session id
    pub session_id: Option<String>,
    /// Match documents sharing at least one tag
    pub tags: Option<Vec<String>>,
    /// Exact visibility
    pub is_public: Option<bool>,
    /// Terms that must all appear in the serialized content
    pub content_search: Vec<String>,
    /// `created_at >= created_after`
    pub created_after: Option<DateTime<Utc>>,
    /// `created_at <= created_before`
    pub created_before: Option<DateTime<Utc>>,
    /// `updated_at >= updated_after`
    pub updated_after: Option<DateTime<Utc>>,
    /// `updated_at <= updated_before`
    pub updated_before: Option<DateTime<Utc>>,
    /// Matching documents to skip
    pub skip: usize,
    /// Page size, 1-100; unset uses the configured default
    pub limit: Option<usize>,
    /// Sort field
    pub sort_by: SortField,
    /// Sort direction
    pub sort_order: SortOrder,
}

/// Paging for session document listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionQuery {
    /// Exact document type
    pub document_type: Option<DocumentType>,
    /// Matching documents to skip
    pub skip: usize,
    /// Page size, 1-100; unset uses the configured session default
    pub limit: Option<usize>,
    /// Sort field
    pub sort_by: SortField,
    /// Sort direction
    pub sort_order: SortOrder,
}

impl Default for SessionQuery {
    fn default() -> Self {
        SessionQuery {
            document_type: None,
            skip: 0,
            limit: None,
            sort_by: SortField::CreatedAt,
            sort_order: SortOrder::Ascending,
        }
    }
}

/// Output of compilation
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledQuery {
    /// Project-scoped predicate
    pub filter: Filter,
    /// Sort and pagination
    pub options: FindOptions,
}

/// Translates requests into store predicates
#[derive(Debug, Clone)]
pub struct QueryCompiler {
    limits: Limits,
    default_page_size: usize,
    session_page_size: usize,
}

impl Default for QueryCompiler {
    fn default() -> Self {
        QueryCompiler::new(Limits::default(), 20, 50)
    }
}

impl QueryCompiler {
    /// Create a compiler with explicit page defaults
    pub fn new(limits: Limits, default_page_size: usize, session_page_size: usize) -> Self {
        QueryCompiler {
            limits,
            default_page_size,
            session_page_size,
        }
    }

    /// Compile a full `list` query
    ///
    /// # Errors
    ///
    /// Returns a validation error if `limit` is outside `1..=100`.
    pub fn compile(&self, project_id: &ProjectId, query: &DocumentQuery) -> Result<CompiledQuery> {
        let limit = self
            .limits
            .page_size(query.limit.unwrap_or(self.default_page_size))?;

        let mut filter = Filter::project(project_id.clone());

        if let Some(pattern) = non_blank(query.name_pattern.as_deref()) {
            filter.push(Clause::Name(literal(pattern)?));
        }
        if let Some(t) = query.document_type {
            filter.push(Clause::Type(t));
        }
        if let Some(session) = non_blank(query.session_id.as_deref()) {
            filter.push(Clause::Session(session.trim().to_string()));
        }
        if let Some(tags) = &query.tags {
            let tags = normalize_tags(tags);
            if !tags.is_empty() {
                filter.push(Clause::TagsAny(tags));
            }
        }
        if let Some(flag) = query.is_public {
            filter.push(Clause::Public(flag));
        }
        push_content_terms(&mut filter, &query.content_search)?;
        if let Some(range) = TimeRange::new(query.created_after, query.created_before) {
            filter.push(Clause::CreatedWithin(range));
        }
        if let Some(range) = TimeRange::new(query.updated_after, query.updated_before) {
            filter.push(Clause::UpdatedWithin(range));
        }

        let options = FindOptions::sorted(Sort::new(query.sort_by, query.sort_order))
            .page(query.skip, limit);

        debug!(project = %project_id, clauses = filter.clauses().len(), skip = query.skip, limit, "compiled list query");
        Ok(CompiledQuery { filter, options })
    }

    /// Compile a content search: conjunctive terms, newest updates first
    pub fn content_search(
        &self,
        project_id: &ProjectId,
        terms: &[String],
        document_type: Option<DocumentType>,
        limit: usize,
    ) -> Result<CompiledQuery> {
        let limit = self.limits.page_size(limit)?;
        let mut filter = Filter::project(project_id.clone());
        if let Some(t) = document_type {
            filter.push(Clause::Type(t));
        }
        push_content_terms(&mut filter, terms)?;

        let options = FindOptions::sorted(Sort::new(SortField::UpdatedAt, SortOrder::Descending))
            .page(0, limit);
        Ok(CompiledQuery { filter, options })
    }

    /// Compile a session listing
    pub fn session(
        &self,
        project_id: &ProjectId,
        session_id: &str,
        query: &SessionQuery,
    ) -> Result<CompiledQuery> {
        let limit = self
            .limits
            .page_size(query.limit.unwrap_or(self.session_page_size))?;
        let mut filter = session_filter(project_id, session_id)?;
        if let Some(t) = query.document_type {
            filter.push(Clause::Type(t));
        }
        let options = FindOptions::sorted(Sort::new(query.sort_by, query.sort_order))
            .page(query.skip, limit);
        Ok(CompiledQuery { filter, options })
    }
}

/// Project + session scope
///
/// # Errors
///
/// Returns a validation error for a blank session id.
pub fn session_filter(project_id: &ProjectId, session_id: &str) -> Result<Filter> {
    let session = session_id.trim();
    if session.is_empty() {
        return Err(Error::validation("session_id must not be empty"));
    }
    Ok(Filter::project(project_id.clone()).with(Clause::Session(session.to_string())))
}

fn push_content_terms(filter: &mut Filter, terms: &[String]) -> Result<()> {
    for term in terms.iter().filter(|t| !t.is_empty()) {
        let pattern = TextPattern::content_term(term)
            .map_err(|e| Error::validation(format!("search pattern rejected: {}", e)))?;
        filter.push(Clause::Content(pattern));
    }
    Ok(())
}

fn literal(source: &str) -> Result<TextPattern> {
    TextPattern::literal(source)
        .map_err(|e| Error::validation(format!("search pattern rejected: {}", e)))
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> ProjectId {
        ProjectId::new("proj").unwrap()
    }

    #[test]
    fn test_empty_query_is_project_scope_only() {
        let compiled = QueryCompiler::default()
            .compile(&project(), &DocumentQuery::default())
            .unwrap();
        assert_eq!(compiled.filter, Filter::project(project()));
        assert_eq!(compiled.options.skip, 0);
        assert_eq!(compiled.options.limit, Some(20));
        assert_eq!(
            compiled.options.sort,
            Some(Sort::new(SortField::UpdatedAt, SortOrder::Descending))
        );
    }

    #[test]
    fn test_every_filter_compiles_to_a_clause() {
        let now = Utc::now();
        let query = DocumentQuery {
            name_pattern: Some("plan".into()),
            document_type: Some(DocumentType::SessionState),
            session_id: Some(" S1 ".into()),
            tags: Some(vec![" a ".into(), "".into()]),
            is_public: Some(true),
            content_search: vec!["alpha".into(), "beta".into()],
            created_after: Some(now),
            updated_before: Some(now),
            ..Default::default()
        };
        let compiled = QueryCompiler::default().compile(&project(), &query).unwrap();
        let clauses = compiled.filter.clauses();
        assert_eq!(clauses.len(), 9);
        assert!(clauses.contains(&Clause::Session("S1".into())));
        assert!(clauses.contains(&Clause::TagsAny(vec!["a".into()])));
        assert!(clauses.contains(&Clause::CreatedWithin(TimeRange {
            after: Some(now),
            before: None
        })));
    }

    #[test]
    fn test_blank_filters_are_skipped() {
        let query = DocumentQuery {
            name_pattern: Some("  ".into()),
            session_id: Some("".into()),
            tags: Some(vec!["  ".into()]),
            content_search: vec!["".into()],
            ..Default::default()
        };
        let compiled = QueryCompiler::default().compile(&project(), &query).unwrap();
        assert!(compiled.filter.clauses().is_empty());
    }

    #[test]
    fn test_limit_bounds() {
        let compiler = QueryCompiler::default();
        for bad in [0, 101] {
            let query = DocumentQuery {
                limit: Some(bad),
                ..Default::default()
            };
            assert!(compiler.compile(&project(), &query).unwrap_err().is_validation());
        }
        let query = DocumentQuery {
            limit: Some(100),
            skip: 7,
            ..Default::default()
        };
        let compiled = compiler.compile(&project(), &query).unwrap();
        assert_eq!(compiled.options.limit, Some(100));
        assert_eq!(compiled.options.skip, 7);
    }

    #[test]
    fn test_content_search_sorts_newest_first() {
        let compiled = QueryCompiler::default()
            .content_search(&project(), &["x".to_string()], Some(DocumentType::Other), 5)
            .unwrap();
        assert_eq!(compiled.filter.clauses().len(), 2);
        assert_eq!(compiled.options.limit, Some(5));
        assert_eq!(
            compiled.options.sort,
            Some(Sort::new(SortField::UpdatedAt, SortOrder::Descending))
        );
    }

    #[test]
    fn test_session_query_defaults() {
        let compiled = QueryCompiler::default()
            .session(&project(), "S1", &SessionQuery::default())
            .unwrap();
        assert_eq!(compiled.options.limit, Some(50));
        assert_eq!(
            compiled.options.sort,
            Some(Sort::new(SortField::CreatedAt, SortOrder::Ascending))
        );
        assert!(QueryCompiler::default()
            .session(&project(), "  ", &SessionQuery::default())
            .is_err());
    }

    #[test]
    fn test_query_deserializes_with_defaults() {
        let query: DocumentQuery = serde_json::from_str(r#"{"sort_by": "name", "sort_order": "asc"}"#).unwrap();
        assert_eq!(query.sort_by, SortField::Name);
        assert_eq!(query.sort_order, SortOrder::Ascending);
        assert_eq!(query.skip, 0);
        assert!(query.limit.is_none());
    }
}
