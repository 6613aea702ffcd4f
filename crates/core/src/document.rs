//! Document model
//!
//! - [`DocumentInput`]: caller-supplied creation payload
//! - [`DocumentDraft`]: normalized, audited record ready for insert (no id yet)
//! - [`Document`]: stored record with its store-assigned id
//!
//! `content` and `metadata` are opaque JSON; the repository only looks inside
//! `content` for text search and schema validation.

use crate::error::Result;
use crate::limits::Limits;
use crate::types::{DocumentId, DocumentType, ProjectId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Actor recorded when the caller does not supply one
pub const DEFAULT_ACTOR: &str = "system";

/// Creation payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentInput {
    /// Display name (trimmed, 1-200 chars)
    pub name: String,
    /// Optional description (max 1000 chars)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Classification, defaults to `other`
    #[serde(default)]
    pub document_type: DocumentType,
    /// Arbitrary JSON content
    pub content: Value,
    /// Originating session (trimmed, 1-100 chars)
    pub session_id: String,
    /// Tags, trimmed with empties dropped (max 20 supplied)
    #[serde(default)]
    pub tags: Vec<String>,
    /// Free-form metadata
    #[serde(default)]
    pub metadata: Map<String, Value>,
    /// Visibility flag
    #[serde(default)]
    pub is_public: bool,
    /// Optional JSON Schema the content must satisfy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_validation: Option<Value>,
}

impl DocumentInput {
    /// Minimal input with defaults for every optional field
    pub fn new(name: impl Into<String>, session_id: impl Into<String>, content: Value) -> Self {
        DocumentInput {
            name: name.into(),
            description: None,
            document_type: DocumentType::default(),
            content,
            session_id: session_id.into(),
            tags: Vec::new(),
            metadata: Map::new(),
            is_public: false,
            schema_validation: None,
        }
    }

    /// Set the document type
    pub fn with_type(mut self, document_type: DocumentType) -> Self {
        self.document_type = document_type;
        self
    }

    /// Set the tag list
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set visibility
    pub fn public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    /// Attach a JSON Schema
    pub fn with_schema(mut self, schema: Value) -> Self {
        self.schema_validation = Some(schema);
        self
    }

    /// Set metadata
    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Trim, normalize tags and check every bound
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn normalize(self, limits: &Limits) -> Result<Self> {
        let name = limits.required("name", &self.name, limits.max_name_length)?;
        let session_id =
            limits.required("session_id", &self.session_id, limits.max_session_id_length)?;
        if let Some(description) = &self.description {
            Limits::bounded("description", description, limits.max_description_length)?;
        }
        let tags = limits.tags(self.tags)?;

        Ok(DocumentInput {
            name,
            session_id,
            tags,
            ..self
        })
    }
}

/// Normalized record awaiting a store-assigned id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentDraft {
    /// Owning project
    pub project_id: ProjectId,
    /// Display name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Classification
    pub document_type: DocumentType,
    /// Opaque content
    pub content: Value,
    /// Originating session
    pub session_id: String,
    /// Normalized tags
    pub tags: Vec<String>,
    /// Free-form metadata
    pub metadata: Map<String, Value>,
    /// Visibility flag
    pub is_public: bool,
    /// Attached schema, if any
    pub schema_validation: Option<Value>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last mutation time
    pub updated_at: DateTime<Utc>,
    /// Creating actor
    pub created_by: String,
    /// Last mutating actor
    pub updated_by: String,
    /// Access-counted reads so far
    pub access_count: u64,
    /// Last access-counted read
    pub last_accessed_at: Option<DateTime<Utc>>,
}

impl DocumentDraft {
    /// Build a fresh draft from already-normalized input
    ///
    /// Audit fields are set to `now` / `actor`; access stats start at zero.
    pub fn new(
        project_id: ProjectId,
        input: DocumentInput,
        actor: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        let actor = actor.into();
        DocumentDraft {
            project_id,
            name: input.name,
            description: input.description,
            document_type: input.document_type,
            content: input.content,
            session_id: input.session_id,
            tags: input.tags,
            metadata: input.metadata,
            is_public: input.is_public,
            schema_validation: input.schema_validation,
            created_at: now,
            updated_at: now,
            created_by: actor.clone(),
            updated_by: actor,
            access_count: 0,
            last_accessed_at: None,
        }
    }

    /// Attach the store-assigned id
    pub fn into_document(self, id: DocumentId) -> Document {
        Document {
            id,
            project_id: self.project_id,
            name: self.name,
            description: self.description,
            document_type: self.document_type,
            content: self.content,
            session_id: self.session_id,
            tags: self.tags,
            metadata: self.metadata,
            is_public: self.is_public,
            schema_validation: self.schema_validation,
            created_at: self.created_at,
            updated_at: self.updated_at,
            created_by: self.created_by,
            updated_by: self.updated_by,
            access_count: self.access_count,
            last_accessed_at: self.last_accessed_at,
        }
    }
}

/// A stored document
///
/// ## Invariants
///
/// - `(project_id, id)` is unique
/// - `tags.len() <= 20`
/// - `access_count` never decreases
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Store-assigned identifier
    pub id: DocumentId,
    /// Owning project
    pub project_id: ProjectId,
    /// Display name
    pub name: String,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Classification
    pub document_type: DocumentType,
    /// Opaque content
    pub content: Value,
    /// Originating session
    pub session_id: String,
    /// Tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Free-form metadata
    #[serde(default)]
    pub metadata: Map<String, Value>,
    /// Visibility flag
    #[serde(default)]
    pub is_public: bool,
    /// Attached schema, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_validation: Option<Value>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last mutation time
    pub updated_at: DateTime<Utc>,
    /// Creating actor
    pub created_by: String,
    /// Last mutating actor
    pub updated_by: String,
    /// Access-counted reads so far
    #[serde(default)]
    pub access_count: u64,
    /// Last access-counted read
    #[serde(default)]
    pub last_accessed_at: Option<DateTime<Utc>>,
}
