//! Statistics Aggregator
//!
//! Rolls the store's grouped reductions up into per-project, per-session and
//! session-list views. All counting happens store-side in one `aggregate`
//! call; this module only reshapes rows.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use docstore_core::{DocumentType, ProjectId, Result};
use docstore_storage::{DocumentStore, Filter, GroupBy, GroupStats};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::convert::StoreResultExt;

/// Totals over a project or one session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStatistics {
    /// Set when the statistics cover a single session
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Documents in scope
    pub total_documents: u64,
    /// Sum of access counts
    pub total_access_count: u64,
    /// Public documents
    pub public_documents: u64,
    /// `total_documents - public_documents`
    pub private_documents: u64,
    /// Documents per type
    pub type_distribution: BTreeMap<DocumentType, u64>,
    /// Earliest creation
    pub first_created: Option<DateTime<Utc>>,
    /// Latest update
    pub last_updated: Option<DateTime<Utc>>,
}

impl DocumentStatistics {
    fn from_group(session_id: Option<String>, stats: GroupStats) -> Self {
        DocumentStatistics {
            session_id,
            total_documents: stats.count,
            total_access_count: stats.access_total,
            public_documents: stats.public_count,
            private_documents: stats.count.saturating_sub(stats.public_count),
            type_distribution: stats.type_counts,
            first_created: stats.first_created,
            last_updated: stats.last_updated,
        }
    }
}

/// One row of a session listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Session id
    pub session_id: String,
    /// Documents in the session
    pub document_count: u64,
    /// Earliest creation in the session
    pub first_created: Option<DateTime<Utc>>,
    /// Latest update in the session
    pub last_updated: Option<DateTime<Utc>>,
    /// Sum of access counts
    pub total_access_count: u64,
}

/// Every session in a project, most recently updated first
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionList {
    /// Session rows
    pub sessions: Vec<SessionSummary>,
    /// `sessions.len()`
    pub total_sessions: u64,
}

/// Totals for everything matched by `filter`
pub(crate) async fn statistics(
    store: &dyn DocumentStore,
    filter: &Filter,
    session_id: Option<String>,
) -> Result<DocumentStatistics> {
    let rows = store
        .aggregate(filter, GroupBy::All)
        .await
        .context("aggregate document statistics")?;
    let stats = rows
        .into_iter()
        .next()
        .unwrap_or_else(|| GroupStats::keyed(None));
    debug!(project = %filter.project_id(), total = stats.count, "computed statistics");
    Ok(DocumentStatistics::from_group(session_id, stats))
}

/// One summary per distinct session in the project
pub(crate) async fn sessions(store: &dyn DocumentStore, project_id: &ProjectId) -> Result<SessionList> {
    let rows = store
        .aggregate(&Filter::project(project_id.clone()), GroupBy::Session)
        .await
        .context("aggregate sessions")?;

    let mut sessions: Vec<SessionSummary> = rows
        .into_iter()
        .map(|row| SessionSummary {
            session_id: row.key.unwrap_or_default(),
            document_count: row.count,
            first_created: row.first_created,
            last_updated: row.last_updated,
            total_access_count: row.access_total,
        })
        .collect();
    sessions.sort_by(|a, b| {
        b.last_updated
            .cmp(&a.last_updated)
            .then_with(|| a.session_id.cmp(&b.session_id))
    });

    Ok(SessionList {
        total_sessions: sessions.len() as u64,
        sessions,
    })
}
