//! Tenant isolation: project A data never reaches project B

use crate::common::*;
use docstore::{BatchRequest, Command, DocumentQuery, Output, Status};
use serde_json::{json, Map, Value};

#[tokio::test]
async fn foreign_project_sees_nothing() {
    let executor = create_executor();
    let doc = create_doc(&executor, "tenant-a", input("secret", "S1", json!({"k": "needle"})).public(true)).await;
    let id = doc.id.to_string();

    assert_eq!(peek(&executor, "tenant-b", &id).await.status, Status::NotFound);

    let deleted = executor
        .execute(Command::DocumentDelete {
            project: "tenant-b".into(),
            id: id.clone(),
            deleted_by: None,
        })
        .await;
    assert_eq!(deleted.status, Status::NotFound);

    let listed = extract_documents(
        executor
            .execute(Command::DocumentList {
                project: "tenant-b".into(),
                query: DocumentQuery::default(),
            })
            .await,
    );
    assert!(listed.is_empty());

    let searched = extract_documents(
        executor
            .execute(Command::DocumentSearch {
                project: "tenant-b".into(),
                terms: vec!["needle".into()],
                document_type: None,
                limit: None,
            })
            .await,
    );
    assert!(searched.is_empty());

    let stats = executor
        .execute(Command::ProjectStatistics { project: "tenant-b".into() })
        .await;
    match stats.data {
        Some(Output::Statistics(s)) => {
            assert_eq!(s.total_documents, 0);
            assert_eq!(s.public_documents, 0);
        }
        other => panic!("Expected Statistics, got {:?}", other),
    }

    let batch = executor
        .execute(Command::Batch {
            project: "tenant-b".into(),
            request: BatchRequest {
                document_ids: vec![id.clone()],
                operation: "set_public".into(),
                parameters: match json!({"is_public": false}) {
                    Value::Object(m) => m,
                    _ => Map::new(),
                },
            },
            actor: None,
        })
        .await;
    match batch.data {
        Some(Output::BatchReport(r)) => assert_eq!(r.success_count, 0),
        other => panic!("Expected BatchReport, got {:?}", other),
    }

    let original = extract_document(peek(&executor, "tenant-a", &id).await);
    assert!(original.is_public);
    assert_eq!(original, doc);
}
