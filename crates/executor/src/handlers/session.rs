//! Session command handlers.

use docstore_core::Result;
use docstore_engine::{DocumentRepository, SessionQuery};

use super::project;
use crate::{Output, Response};

/// Handle SessionDocuments command.
pub async fn documents(
    repo: &DocumentRepository,
    project_id: String,
    session_id: String,
    query: SessionQuery,
) -> Result<Response> {
    let project_id = project(&project_id)?;
    let docs = repo.list_by_session(&project_id, &session_id, &query).await?;
    Ok(Response::success(
        format!("found {} document(s) in session {}", docs.len(), session_id.trim()),
        Output::Documents(docs),
    ))
}

/// Handle SessionDelete command.
pub async fn delete(
    repo: &DocumentRepository,
    project_id: String,
    session_id: String,
    deleted_by: Option<String>,
) -> Result<Response> {
    let project_id = project(&project_id)?;
    let result = repo
        .delete_session(&project_id, &session_id, deleted_by.as_deref())
        .await?;
    Ok(Response::success(
        format!(
            "deleted {} document(s) from session {}",
            result.deleted_count, result.session_id
        ),
        Output::SessionDeleted(result),
    ))
}

/// Handle SessionStatistics command.
pub async fn statistics(
    repo: &DocumentRepository,
    project_id: String,
    session_id: String,
) -> Result<Response> {
    let project_id = project(&project_id)?;
    let stats = repo.session_statistics(&project_id, &session_id).await?;
    Ok(Response::success(
        format!("statistics for session {}", session_id.trim()),
        Output::Statistics(stats),
    ))
}

/// Handle SessionList command.
pub async fn list(repo: &DocumentRepository, project_id: String) -> Result<Response> {
    let project_id = project(&project_id)?;
    let sessions = repo.list_sessions(&project_id).await?;
    Ok(Response::success(
        format!("found {} session(s)", sessions.total_sessions),
        Output::Sessions(sessions),
    ))
}
