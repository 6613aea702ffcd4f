//! Concurrent access counting

use std::sync::Arc;

use crate::common::*;
use docstore::Command;
use serde_json::json;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_counted_reads_are_not_lost() {
    let executor = Arc::new(create_executor());
    let doc = create_doc(&executor, "acme", input("hot", "S1", json!({}))).await;
    let id = doc.id.to_string();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let executor = Arc::clone(&executor);
        let id = id.clone();
        handles.push(tokio::spawn(async move {
            for _ in 0..10 {
                let response = executor
                    .execute(Command::DocumentGet {
                        project: "acme".into(),
                        id: id.clone(),
                        increment_access: true,
                    })
                    .await;
                assert!(response.is_success());
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let final_doc = extract_document(peek(&executor, "acme", &id).await);
    assert_eq!(final_doc.access_count, 80);
}
