//! Command enum defining every repository operation.
//!
//! Commands are:
//! - **Self-contained**: all parameters needed for execution are in the variant
//! - **Serializable**: can be converted to/from JSON for transport layers
//! - **Pure data**: no closures or executable code
//!
//! The `project` field is the caller's tenant, already authenticated by
//! whatever transport produced the command.

use docstore_core::{DocumentInput, DocumentType};
use docstore_engine::{BatchRequest, DocumentQuery, SessionQuery};
use serde::{Deserialize, Serialize};
use serde_json::Value;

fn default_true() -> bool {
    true
}

/// A self-contained, serializable repository operation.
///
/// # Example
///
/// ```ignore
/// use docstore::{Command, DocumentInput};
/// use serde_json::json;
///
/// let cmd = Command::DocumentCreate {
///     project: "acme".into(),
///     document: DocumentInput::new("plan", "S1", json!({"steps": []})),
///     created_by: None,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    /// Liveness check.
    /// Returns: `Output::Pong`
    Ping,

    /// Create a document.
    /// Returns: `Output::Document`
    DocumentCreate {
        project: String,
        document: DocumentInput,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        created_by: Option<String>,
    },

    /// Fetch a document; counts an access unless `increment_access` is false.
    /// Returns: `Output::Document`
    DocumentGet {
        project: String,
        id: String,
        #[serde(default = "default_true")]
        increment_access: bool,
    },

    /// Fetch only a document's content; counts an access.
    /// Returns: `Output::Content`
    DocumentContent { project: String, id: String },

    /// Delete a document.
    /// Returns: `Output::Deleted`
    DocumentDelete {
        project: String,
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        deleted_by: Option<String>,
    },

    /// Filtered, sorted, paginated listing.
    /// Returns: `Output::Documents`
    DocumentList {
        project: String,
        #[serde(default)]
        query: DocumentQuery,
    },

    /// Conjunctive content search.
    /// Returns: `Output::Documents`
    DocumentSearch {
        project: String,
        terms: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        document_type: Option<DocumentType>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        limit: Option<usize>,
    },

    /// Check a stored document against a schema without modifying it.
    /// Returns: `Output::SchemaCheck`
    DocumentValidate {
        project: String,
        id: String,
        schema: Value,
    },

    /// Every document type with its label.
    /// Returns: `Output::DocumentTypes`
    DocumentTypes,

    /// Documents of one session.
    /// Returns: `Output::Documents`
    SessionDocuments {
        project: String,
        session_id: String,
        #[serde(default)]
        query: SessionQuery,
    },

    /// Delete every document of a session.
    /// Returns: `Output::SessionDeleted`
    SessionDelete {
        project: String,
        session_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        deleted_by: Option<String>,
    },

    /// Totals for one session.
    /// Returns: `Output::Statistics`
    SessionStatistics { project: String, session_id: String },

    /// Every session in the project.
    /// Returns: `Output::Sessions`
    SessionList { project: String },

    /// Apply one mutation to many documents.
    /// Returns: `Output::BatchReport`
    Batch {
        project: String,
        request: BatchRequest,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        actor: Option<String>,
    },

    /// Totals for the whole project.
    /// Returns: `Output::Statistics`
    ProjectStatistics { project: String },
}

impl Command {
    /// Wire name of the command, for logging
    pub fn name(&self) -> &'static str {
        match self {
            Command::Ping => "Ping",
            Command::DocumentCreate { .. } => "DocumentCreate",
            Command::DocumentGet { .. } => "DocumentGet",
            Command::DocumentContent { .. } => "DocumentContent",
            Command::DocumentDelete { .. } => "DocumentDelete",
            Command::DocumentList { .. } => "DocumentList",
            Command::DocumentSearch { .. } => "DocumentSearch",
            Command::DocumentValidate { .. } => "DocumentValidate",
            Command::DocumentTypes => "DocumentTypes",
            Command::SessionDocuments { .. } => "SessionDocuments",
            Command::SessionDelete { .. } => "SessionDelete",
            Command::SessionStatistics { .. } => "SessionStatistics",
            Command::SessionList { .. } => "SessionList",
            Command::Batch { .. } => "Batch",
            Command::ProjectStatistics { .. } => "ProjectStatistics",
        }
    }
}
