//! Batch operations through the command surface

use crate::common::*;
use docstore::{BatchRequest, Command, DocumentType, Output, Status};
use serde_json::{json, Map, Value};

fn params(v: Value) -> Map<String, Value> {
    match v {
        Value::Object(m) => m,
        _ => Map::new(),
    }
}

#[tokio::test]
async fn malformed_ids_are_skipped_silently() {
    let executor = create_executor();
    let good = create_doc(&executor, "acme", input("good", "S1", json!({}))).await;
    let other = create_doc(&executor, "acme", input("other", "S1", json!({}))).await;

    let response = executor
        .execute(Command::Batch {
            project: "acme".into(),
            request: BatchRequest {
                document_ids: vec![good.id.to_string(), "bogus-id".into()],
                operation: "set_public".into(),
                parameters: params(json!({"is_public": true})),
            },
            actor: Some("ops".into()),
        })
        .await;
    assert!(response.is_success());
    match response.data {
        Some(Output::BatchReport(r)) => {
            assert_eq!(r.success_count, 1);
            assert_eq!(r.error_count, 0);
        }
        other => panic!("Expected BatchReport, got {:?}", other),
    }

    let good = extract_document(peek(&executor, "acme", &good.id.to_string()).await);
    assert!(good.is_public);
    assert_eq!(good.updated_by, "ops");
    let other = extract_document(peek(&executor, "acme", &other.id.to_string()).await);
    assert!(!other.is_public);
}

#[tokio::test]
async fn unknown_type_changes_nothing() {
    let executor = create_executor();
    let doc = create_doc(&executor, "acme", input("n", "S1", json!({}))).await;

    let response = executor
        .execute(Command::Batch {
            project: "acme".into(),
            request: BatchRequest {
                document_ids: vec![doc.id.to_string()],
                operation: "update_type".into(),
                parameters: params(json!({"document_type": "spreadsheet"})),
            },
            actor: None,
        })
        .await;
    assert_eq!(response.status, Status::ValidationError);

    let after = extract_document(peek(&executor, "acme", &doc.id.to_string()).await);
    assert_eq!(after.document_type, DocumentType::Other);
    assert_eq!(after, doc);
}

#[tokio::test]
async fn unknown_operation_is_named() {
    let executor = create_executor();
    let doc = create_doc(&executor, "acme", input("n", "S1", json!({}))).await;
    let response = executor
        .execute(Command::Batch {
            project: "acme".into(),
            request: BatchRequest {
                document_ids: vec![doc.id.to_string()],
                operation: "shred".into(),
                parameters: Map::new(),
            },
            actor: None,
        })
        .await;
    assert_eq!(response.status, Status::ValidationError);
    assert!(response.message.contains("shred"));
}
