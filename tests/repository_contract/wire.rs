//! Commands arriving as JSON, the way a transport hands them over

use crate::common::*;
use docstore::{Command, Output, Status};
use serde_json::json;

#[tokio::test]
async fn json_commands_round_through_the_executor() {
    let executor = create_executor();

    let create: Command = serde_json::from_value(json!({
        "DocumentCreate": {
            "project": "acme",
            "document": {
                "name": "checkpoint",
                "document_type": "session_state",
                "session_id": "S9",
                "content": {"step": 4},
                "tags": ["resume"]
            },
            "created_by": "agent-7"
        }
    }))
    .unwrap();
    let doc = extract_document(executor.execute(create).await);
    assert_eq!(doc.created_by, "agent-7");

    let list: Command = serde_json::from_value(json!({
        "DocumentList": {
            "project": "acme",
            "query": {"document_type": "session_state", "tags": ["resume"], "limit": 5}
        }
    }))
    .unwrap();
    let response = executor.execute(list).await;
    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["status"], "success");
    assert_eq!(value["data"]["Documents"][0]["name"], "checkpoint");
    assert_eq!(value["data"]["Documents"][0]["document_type"], "session_state");

    let bad_limit: Command = serde_json::from_value(json!({
        "DocumentList": {"project": "acme", "query": {"limit": 500}}
    }))
    .unwrap();
    assert_eq!(executor.execute(bad_limit).await.status, Status::ValidationError);

    let types: Command = serde_json::from_value(json!("DocumentTypes")).unwrap();
    match executor.execute(types).await.data {
        Some(Output::DocumentTypes(t)) => {
            let labels: Vec<_> = t.iter().map(|i| i.label.as_str()).collect();
            assert_eq!(labels, vec!["Agent Component Model", "Session State", "Other"]);
        }
        other => panic!("Expected DocumentTypes, got {:?}", other),
    }
}
