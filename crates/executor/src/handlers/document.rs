//! Document command handlers.

use docstore_core::{DocumentInput, DocumentType, Result};
use docstore_engine::{DocumentQuery, DocumentRepository};
use serde_json::Value;

use super::project;
use crate::{Output, Response};

/// Handle DocumentCreate command.
pub async fn create(
    repo: &DocumentRepository,
    project_id: String,
    document: DocumentInput,
    created_by: Option<String>,
) -> Result<Response> {
    let project_id = project(&project_id)?;
    let doc = repo
        .create(&project_id, document, created_by.as_deref())
        .await?;
    Ok(Response::success(
        "document created",
        Output::Document(doc),
    ))
}

/// Handle DocumentGet command.
pub async fn get(
    repo: &DocumentRepository,
    project_id: String,
    id: String,
    increment_access: bool,
) -> Result<Response> {
    let project_id = project(&project_id)?;
    let doc = repo.get(&project_id, &id, increment_access).await?;
    Ok(Response::success("document retrieved", Output::Document(doc)))
}

/// Handle DocumentContent command.
pub async fn content(repo: &DocumentRepository, project_id: String, id: String) -> Result<Response> {
    let project_id = project(&project_id)?;
    let content = repo.get_content(&project_id, &id).await?;
    Ok(Response::success("document content retrieved", Output::Content(content)))
}

/// Handle DocumentDelete command.
pub async fn delete(
    repo: &DocumentRepository,
    project_id: String,
    id: String,
    deleted_by: Option<String>,
) -> Result<Response> {
    let project_id = project(&project_id)?;
    let deleted = repo.delete(&project_id, &id, deleted_by.as_deref()).await?;
    Ok(Response::success("document deleted", Output::Deleted(deleted)))
}

/// Handle DocumentList command.
pub async fn list(
    repo: &DocumentRepository,
    project_id: String,
    query: DocumentQuery,
) -> Result<Response> {
    let project_id = project(&project_id)?;
    let docs = repo.list(&project_id, &query).await?;
    Ok(Response::success(
        format!("found {} document(s)", docs.len()),
        Output::Documents(docs),
    ))
}

/// Handle DocumentSearch command.
pub async fn search(
    repo: &DocumentRepository,
    project_id: String,
    terms: Vec<String>,
    document_type: Option<DocumentType>,
    limit: Option<usize>,
) -> Result<Response> {
    let project_id = project(&project_id)?;
    let docs = repo
        .search_by_content(&project_id, &terms, document_type, limit)
        .await?;
    Ok(Response::success(
        format!("found {} matching document(s)", docs.len()),
        Output::Documents(docs),
    ))
}

/// Handle DocumentValidate command.
///
/// A failed check is still a successful command; the verdict is in the
/// returned [`SchemaCheck`](docstore_engine::SchemaCheck).
pub async fn validate(
    repo: &DocumentRepository,
    project_id: String,
    id: String,
    schema: Value,
) -> Result<Response> {
    let project_id = project(&project_id)?;
    let check = repo.validate_against(&project_id, &id, &schema).await?;
    let message = if check.valid {
        "document content is valid"
    } else {
        "document content does not satisfy the schema"
    };
    Ok(Response::success(message, Output::SchemaCheck(check)))
}

/// Handle DocumentTypes command.
pub fn types(repo: &DocumentRepository) -> Response {
    Response::success("document types", Output::DocumentTypes(repo.document_types()))
}
