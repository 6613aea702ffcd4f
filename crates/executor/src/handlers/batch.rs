//! Batch and project statistics handlers.

use docstore_core::Result;
use docstore_engine::{BatchRequest, DocumentRepository};

use super::project;
use crate::{Output, Response};

/// Handle Batch command.
pub async fn batch(
    repo: &DocumentRepository,
    project_id: String,
    request: BatchRequest,
    actor: Option<String>,
) -> Result<Response> {
    let project_id = project(&project_id)?;
    let report = repo.batch(&project_id, &request, actor.as_deref()).await?;
    Ok(Response::success(
        format!("batch {} completed", request.operation),
        Output::BatchReport(report),
    ))
}

/// Handle ProjectStatistics command.
pub async fn project_statistics(repo: &DocumentRepository, project_id: String) -> Result<Response> {
    let project_id = project(&project_id)?;
    let stats = repo.project_statistics(&project_id).await?;
    Ok(Response::success("project statistics", Output::Statistics(stats)))
}
