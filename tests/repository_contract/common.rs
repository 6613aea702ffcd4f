//! Common test utilities for contract tests

use docstore::{Command, Document, DocumentInput, Executor, Output, Response};
use serde_json::Value;

/// Create an executor over an empty in-memory store
pub fn create_executor() -> Executor {
    Executor::in_memory()
}

/// Create a document and return it, panicking on failure
pub async fn create_doc(executor: &Executor, project: &str, input: DocumentInput) -> Document {
    let response = executor
        .execute(Command::DocumentCreate {
            project: project.into(),
            document: input,
            created_by: None,
        })
        .await;
    extract_document(response)
}

/// Build a minimal input
pub fn input(name: &str, session: &str, content: Value) -> DocumentInput {
    DocumentInput::new(name, session, content)
}

/// Fetch a document without counting the access
pub async fn peek(executor: &Executor, project: &str, id: &str) -> Response {
    executor
        .execute(Command::DocumentGet {
            project: project.into(),
            id: id.into(),
            increment_access: false,
        })
        .await
}

/// Extract a document from a successful response
pub fn extract_document(response: Response) -> Document {
    match response.data {
        Some(Output::Document(doc)) => doc,
        _ => panic!("Expected Output::Document, got {:?}", response),
    }
}

/// Extract a document list from a successful response
#[allow(dead_code)]
pub fn extract_documents(response: Response) -> Vec<Document> {
    match response.data {
        Some(Output::Documents(docs)) => docs,
        _ => panic!("Expected Output::Documents, got {:?}", response),
    }
}
