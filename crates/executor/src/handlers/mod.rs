//! Command handlers organized by resource.
//!
//! | Module | Commands |
//! |--------|----------|
//! | `document` | DocumentCreate, DocumentGet, DocumentContent, DocumentDelete, DocumentList, DocumentSearch, DocumentValidate, DocumentTypes |
//! | `session` | SessionDocuments, SessionDelete, SessionStatistics, SessionList |
//! | `batch` | Batch, ProjectStatistics |

pub mod batch;
pub mod document;
pub mod session;

use docstore_core::{ProjectId, Result};

/// Resolve the caller's project
pub(crate) fn project(raw: &str) -> Result<ProjectId> {
    ProjectId::new(raw)
}
