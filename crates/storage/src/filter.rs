//! Structured predicates handed to the store
//!
//! A [`Filter`] is always scoped to one project: the scope is taken at
//! construction and there is no way to widen or replace it afterwards.
//! Additional [`Clause`]s are conjunctive.
//!
//! Stores may translate filters into their own query language; the
//! in-memory store evaluates them directly with [`Filter::matches`].

use chrono::{DateTime, Utc};
use docstore_core::{Document, DocumentId, DocumentType, ProjectId};
use regex::{Regex, RegexBuilder};
use std::collections::BTreeSet;
use std::fmt;

/// Case-insensitive literal substring pattern
///
/// The source text is regex-escaped before compilation, so characters like
/// `.` or `(` in caller input match themselves.
#[derive(Clone)]
pub struct TextPattern {
    source: String,
    regex: Regex,
}

impl TextPattern {
    /// Compile a literal, case-insensitive pattern
    pub fn literal(source: &str) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(&regex::escape(source))
            .case_insensitive(true)
            .build()?;
        Ok(TextPattern {
            source: source.to_string(),
            regex,
        })
    }

    /// Compile a term for matching against [`flatten_content`] output
    ///
    /// The flat form is JSON text, so the term is JSON string-encoded first;
    /// a `"` or `\` in the term then lines up with its escaped form in the
    /// content.
    pub fn content_term(source: &str) -> Result<Self, regex::Error> {
        let encoded = serde_json::Value::String(source.to_string()).to_string();
        let inner = &encoded[1..encoded.len() - 1];
        let regex = RegexBuilder::new(&regex::escape(inner))
            .case_insensitive(true)
            .build()?;
        Ok(TextPattern {
            source: source.to_string(),
            regex,
        })
    }

    /// The unescaped caller input
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Test a haystack
    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }
}

impl fmt::Debug for TextPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TextPattern").field(&self.source).finish()
    }
}

impl PartialEq for TextPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

/// Inclusive time window; either bound may be open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeRange {
    /// Lower bound (inclusive)
    pub after: Option<DateTime<Utc>>,
    /// Upper bound (inclusive)
    pub before: Option<DateTime<Utc>>,
}

impl TimeRange {
    /// Build a range; `None` when both bounds are open
    pub fn new(after: Option<DateTime<Utc>>, before: Option<DateTime<Utc>>) -> Option<Self> {
        if after.is_none() && before.is_none() {
            return None;
        }
        Some(TimeRange { after, before })
    }

    /// True if `t` lies within the window
    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        self.after.map_or(true, |a| t >= a) && self.before.map_or(true, |b| t <= b)
    }
}

/// A single conjunctive condition
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    /// Exactly this document
    Id(DocumentId),
    /// Any of these documents
    IdIn(BTreeSet<DocumentId>),
    /// Name contains the pattern
    Name(TextPattern),
    /// Document type equals
    Type(DocumentType),
    /// Session id equals
    Session(String),
    /// At least one tag in common
    TagsAny(Vec<String>),
    /// Visibility equals
    Public(bool),
    /// Serialized content contains the pattern
    Content(TextPattern),
    /// `created_at` within range
    CreatedWithin(TimeRange),
    /// `updated_at` within range
    UpdatedWithin(TimeRange),
}

impl Clause {
    fn matches(&self, doc: &Document, content: &mut ContentText<'_>) -> bool {
        match self {
            Clause::Id(id) => doc.id == *id,
            Clause::IdIn(ids) => ids.contains(&doc.id),
            Clause::Name(pattern) => pattern.is_match(&doc.name),
            Clause::Type(t) => doc.document_type == *t,
            Clause::Session(session) => doc.session_id == *session,
            Clause::TagsAny(tags) => doc.tags.iter().any(|t| tags.contains(t)),
            Clause::Public(flag) => doc.is_public == *flag,
            Clause::Content(pattern) => pattern.is_match(content.get()),
            Clause::CreatedWithin(range) => range.contains(doc.created_at),
            Clause::UpdatedWithin(range) => range.contains(doc.updated_at),
        }
    }
}

/// Lazily serialized document content, shared across clauses
struct ContentText<'a> {
    doc: &'a Document,
    text: Option<String>,
}

impl<'a> ContentText<'a> {
    fn get(&mut self) -> &str {
        let doc = self.doc;
        self.text.get_or_insert_with(|| flatten_content(doc))
    }
}

/// Flat text form of a document's content used for content search
pub fn flatten_content(doc: &Document) -> String {
    doc.content.to_string()
}

/// Project-scoped conjunctive predicate
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    project_id: ProjectId,
    clauses: Vec<Clause>,
}

impl Filter {
    /// Filter matching every document in a project
    pub fn project(project_id: ProjectId) -> Self {
        Filter {
            project_id,
            clauses: Vec::new(),
        }
    }

    /// Filter matching one document in a project
    pub fn document(project_id: ProjectId, id: DocumentId) -> Self {
        Filter::project(project_id).with(Clause::Id(id))
    }

    /// Add a clause
    pub fn with(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    /// Add a clause in place
    pub fn push(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }

    /// The mandatory tenant scope
    pub fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    /// Additional clauses
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Evaluate against a document
    pub fn matches(&self, doc: &Document) -> bool {
        if doc.project_id != self.project_id {
            return false;
        }
        let mut content = ContentText { doc, text: None };
        self.clauses.iter().all(|c| c.matches(doc, &mut content))
    }
}
