//! Batch Operation Executor
//!
//! A batch names a set of documents and one mutation to apply to all of them.
//! The operation kind is parsed into [`BatchOperation`] before any id is
//! looked at, so an unknown kind or a bad parameter never touches the store.
//!
//! Batches are not atomic across the set: the store reports how many
//! documents it actually changed and that is what the report carries.

use std::collections::BTreeSet;

use chrono::Utc;
use docstore_core::{DocumentId, DocumentType, Error, Limits, ProjectId, Result};
use docstore_storage::{Assignment, Clause, DocumentStore, Filter, Update};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

use crate::convert::StoreResultExt;

/// Raw batch request as it arrives from a caller
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BatchRequest {
    /// Candidate ids; malformed entries are dropped
    pub document_ids: Vec<String>,
    /// One of `delete`, `update_tags`, `update_type`, `set_public`
    pub operation: String,
    /// Operation parameters
    #[serde(default)]
    pub parameters: Map<String, Value>,
}

/// A validated batch mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOperation {
    /// Remove every target
    Delete,
    /// Overwrite tags
    UpdateTags(Vec<String>),
    /// Reclassify
    UpdateType(DocumentType),
    /// Change visibility
    SetPublic(bool),
}

impl BatchOperation {
    /// Parse an operation kind and its parameters
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown kind or a malformed
    /// parameter.
    pub fn parse(kind: &str, parameters: &Map<String, Value>, limits: &Limits) -> Result<Self> {
        match kind {
            "delete" => Ok(BatchOperation::Delete),
            "update_tags" => {
                let tags = match parameters.get("tags") {
                    None | Some(Value::Null) => Vec::new(),
                    Some(Value::Array(items)) => items
                        .iter()
                        .map(|v| {
                            v.as_str()
                                .map(str::to_string)
                                .ok_or_else(|| Error::validation("tags must be strings"))
                        })
                        .collect::<Result<Vec<_>>>()?,
                    Some(_) => return Err(Error::validation("tags must be a list of strings")),
                };
                Ok(BatchOperation::UpdateTags(limits.tags(tags)?))
            }
            "update_type" => {
                let raw = parameters
                    .get("document_type")
                    .and_then(Value::as_str)
                    .ok_or_else(|| Error::validation("invalid document type: missing"))?;
                Ok(BatchOperation::UpdateType(raw.parse()?))
            }
            "set_public" => match parameters.get("is_public") {
                None | Some(Value::Null) => Ok(BatchOperation::SetPublic(false)),
                Some(Value::Bool(flag)) => Ok(BatchOperation::SetPublic(*flag)),
                Some(_) => Err(Error::validation("is_public must be a boolean")),
            },
            other => Err(Error::validation(format!(
                "unsupported batch operation: {}",
                other
            ))),
        }
    }

    /// Wire name of the operation
    pub fn kind(&self) -> &'static str {
        match self {
            BatchOperation::Delete => "delete",
            BatchOperation::UpdateTags(_) => "update_tags",
            BatchOperation::UpdateType(_) => "update_type",
            BatchOperation::SetPublic(_) => "set_public",
        }
    }
}

/// What a batch did
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BatchReport {
    /// Documents the store changed
    pub success_count: u64,
    /// Sub-operations that failed
    pub error_count: u64,
    /// One line per sub-operation
    pub details: Vec<String>,
}

/// Keep well-formed ids, each once
///
/// # Errors
///
/// Returns a validation error if nothing survives.
pub fn parse_ids(raw: &[String]) -> Result<BTreeSet<DocumentId>> {
    let ids: BTreeSet<DocumentId> = raw
        .iter()
        .filter_map(|s| DocumentId::parse(s).ok())
        .collect();
    if ids.is_empty() {
        return Err(Error::validation("no valid document ids"));
    }
    Ok(ids)
}

pub(crate) async fn run(
    store: &dyn DocumentStore,
    limits: &Limits,
    project_id: &ProjectId,
    request: &BatchRequest,
    actor: &str,
) -> Result<BatchReport> {
    let operation = BatchOperation::parse(&request.operation, &request.parameters, limits)?;
    let ids = parse_ids(&request.document_ids)?;
    let requested = ids.len();
    let filter = Filter::project(project_id.clone()).with(Clause::IdIn(ids));

    let now = Utc::now();
    let (count, detail) = match &operation {
        BatchOperation::Delete => {
            let n = store.delete_many(&filter).await.context("batch delete")?;
            (n, format!("deleted {} document(s)", n))
        }
        BatchOperation::UpdateTags(tags) => {
            let update = Update::new()
                .set(Assignment::Tags(tags.clone()))
                .touch(now, actor);
            let n = store.update_many(&filter, &update).await.context("batch update tags")?;
            (n, format!("updated tags on {} document(s)", n))
        }
        BatchOperation::UpdateType(t) => {
            let update = Update::new().set(Assignment::Type(*t)).touch(now, actor);
            let n = store.update_many(&filter, &update).await.context("batch update type")?;
            (n, format!("set type {} on {} document(s)", t, n))
        }
        BatchOperation::SetPublic(flag) => {
            let update = Update::new().set(Assignment::Public(*flag)).touch(now, actor);
            let n = store.update_many(&filter, &update).await.context("batch set public")?;
            (n, format!("set is_public={} on {} document(s)", flag, n))
        }
    };

    info!(
        project = %project_id,
        operation = operation.kind(),
        requested,
        changed = count,
        actor,
        "batch applied"
    );

    Ok(BatchReport {
        success_count: count,
        error_count: 0,
        details: vec![detail],
    })
}
