//! Core identifier and classification types
//!
//! This module defines the foundational types:
//! - ProjectId: Tenant key scoping every operation
//! - DocumentId: Store-assigned document identifier
//! - DocumentType: Closed document classification

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Tenant identifier
///
/// Every read, write and aggregation is scoped to exactly one project.
/// The identity itself is authenticated by the transport layer; here it is
/// only required to be non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Create a project id, rejecting blank input
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(Error::validation("project id must not be empty"));
        }
        Ok(ProjectId(id))
    }

    /// The raw project id
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique identifier for a stored document
///
/// A DocumentId wraps a UUID v4 assigned by the store at insert time.
/// Caller-supplied ids are parsed with [`DocumentId::parse`] before any
/// store lookup; a string that is not a UUID is never sent to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Create a new random DocumentId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a caller-supplied identifier
    ///
    /// Accepts standard UUID format (with or without hyphens).
    ///
    /// # Errors
    /// Returns a validation error if the string is not well-formed.
    pub fn parse(s: &str) -> Result<Self> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| Error::validation(format!("invalid document id: {:?}", s)))
    }

    /// Check well-formedness without building an id
    pub fn is_valid(s: &str) -> bool {
        Uuid::parse_str(s.trim()).is_ok()
    }

    /// The underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for DocumentId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Closed classification of a document
///
/// ## Wire Values
///
/// These values are part of the stable contract and MUST NOT change:
/// - AgentComponentModel = "agent_component_model"
/// - SessionState = "session_state"
/// - Other = "other"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Serialized agent component model
    AgentComponentModel,
    /// Snapshot of an interaction session
    SessionState,
    /// Anything else
    #[default]
    Other,
}

impl DocumentType {
    /// Every member, in declaration order
    pub const ALL: [DocumentType; 3] = [
        DocumentType::AgentComponentModel,
        DocumentType::SessionState,
        DocumentType::Other,
    ];

    /// Wire value
    pub const fn as_str(&self) -> &'static str {
        match self {
            DocumentType::AgentComponentModel => "agent_component_model",
            DocumentType::SessionState => "session_state",
            DocumentType::Other => "other",
        }
    }

    /// Display label, e.g. "Agent Component Model"
    pub fn label(&self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl FromStr for DocumentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DocumentType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::validation(format!("invalid document type: {:?}", s)))
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
