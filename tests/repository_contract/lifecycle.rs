//! Create, read, count and delete through the executor

use crate::common::*;
use docstore::{Command, DocumentQuery, Output, Status};
use serde_json::json;

#[tokio::test]
async fn create_then_get_returns_identical_content() {
    let executor = create_executor();
    let content = json!({"model": {"layers": [64, 32]}, "unicode": "日本語"});
    let doc = create_doc(&executor, "acme", input("model", "S1", content.clone())).await;

    let read = extract_document(peek(&executor, "acme", &doc.id.to_string()).await);
    assert_eq!(read.content, content);
    assert_eq!(read.access_count, 0);
}

#[tokio::test]
async fn access_counted_reads_accumulate() {
    let executor = create_executor();
    let doc = create_doc(&executor, "acme", input("n", "S1", json!({}))).await;
    let id = doc.id.to_string();

    let mut previous = None;
    for n in 1..=4u64 {
        let read = extract_document(
            executor
                .execute(Command::DocumentGet {
                    project: "acme".into(),
                    id: id.clone(),
                    increment_access: true,
                })
                .await,
        );
        assert_eq!(read.access_count, n);
        assert!(read.last_accessed_at.is_some());
        assert!(read.last_accessed_at >= previous);
        previous = read.last_accessed_at;
    }

    let untouched = extract_document(peek(&executor, "acme", &id).await);
    assert_eq!(untouched.access_count, 4);
}

#[tokio::test]
async fn tags_are_trimmed_and_blanks_dropped() {
    let executor = create_executor();
    let doc = create_doc(
        &executor,
        "acme",
        input("n", "S1", json!({})).with_tags([" a ", "", "a", "b "]),
    )
    .await;
    assert_eq!(doc.tags, vec!["a", "a", "b"]);
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let executor = create_executor();
    let doc = create_doc(&executor, "acme", input("n", "S1", json!({}))).await;
    let id = doc.id.to_string();

    let deleted = executor
        .execute(Command::DocumentDelete {
            project: "acme".into(),
            id: id.clone(),
            deleted_by: Some("ops".into()),
        })
        .await;
    assert!(deleted.is_success());
    assert_eq!(peek(&executor, "acme", &id).await.status, Status::NotFound);
}

#[tokio::test]
async fn session_delete_removes_exactly_the_session() {
    let executor = create_executor();
    let mut ids = Vec::new();
    for i in 0..3 {
        ids.push(create_doc(&executor, "acme", input(&format!("d{}", i), "S1", json!({}))).await.id);
    }
    let survivor = create_doc(&executor, "acme", input("other", "S2", json!({}))).await;

    let response = executor
        .execute(Command::SessionDelete {
            project: "acme".into(),
            session_id: "S1".into(),
            deleted_by: None,
        })
        .await;
    let deletion = match response.data {
        Some(Output::SessionDeleted(d)) => d,
        other => panic!("Expected SessionDeleted, got {:?}", other),
    };
    assert_eq!(deletion.deleted_count, 3);
    let mut reported = deletion.documents_deleted;
    reported.sort();
    ids.sort();
    assert_eq!(reported, ids);

    for id in &ids {
        assert_eq!(peek(&executor, "acme", &id.to_string()).await.status, Status::NotFound);
    }
    assert!(peek(&executor, "acme", &survivor.id.to_string()).await.is_success());
}

#[tokio::test]
async fn content_search_requires_every_term() {
    let executor = create_executor();
    create_doc(&executor, "acme", input("both", "S1", json!({"t": "Alpha BETA"}))).await;
    create_doc(&executor, "acme", input("alpha", "S1", json!({"t": "alpha"}))).await;
    create_doc(&executor, "acme", input("beta", "S1", json!({"t": "beta"}))).await;

    let query = DocumentQuery {
        content_search: vec!["alpha".into(), "beta".into()],
        ..Default::default()
    };
    let docs = extract_documents(
        executor
            .execute(Command::DocumentList {
                project: "acme".into(),
                query,
            })
            .await,
    );
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].name, "both");
}

#[tokio::test]
async fn schema_failure_persists_nothing() {
    let executor = create_executor();
    let response = executor
        .execute(Command::DocumentCreate {
            project: "acme".into(),
            document: input("n", "S1", json!({"count": "three"}))
                .with_schema(json!({"properties": {"count": {"type": "integer"}}})),
            created_by: None,
        })
        .await;
    assert_eq!(response.status, Status::ValidationError);
    assert!(response.message.contains("schema validation failed"));

    let stats = executor
        .execute(Command::ProjectStatistics { project: "acme".into() })
        .await;
    match stats.data {
        Some(Output::Statistics(s)) => assert_eq!(s.total_documents, 0),
        other => panic!("Expected Statistics, got {:?}", other),
    }
}
