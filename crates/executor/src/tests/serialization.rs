//! Wire-format tests for Command, Output and Response.

use serde_json::json;

use crate::{Command, DocumentType, Output, Response, SortField, Status};

#[test]
fn test_unit_command_is_a_bare_string() {
    let cmd: Command = serde_json::from_value(json!("Ping")).unwrap();
    assert_eq!(cmd, Command::Ping);
    assert_eq!(serde_json::to_value(&Command::DocumentTypes).unwrap(), json!("DocumentTypes"));
}

#[test]
fn test_document_get_defaults_to_counting_access() {
    let cmd: Command =
        serde_json::from_value(json!({"DocumentGet": {"project": "p", "id": "x"}})).unwrap();
    assert_eq!(
        cmd,
        Command::DocumentGet {
            project: "p".into(),
            id: "x".into(),
            increment_access: true,
        }
    );
}

#[test]
fn test_document_create_accepts_minimal_input() {
    let cmd: Command = serde_json::from_value(json!({
        "DocumentCreate": {
            "project": "p",
            "document": {"name": "n", "session_id": "S1", "content": {"a": 1}}
        }
    }))
    .unwrap();
    match cmd {
        Command::DocumentCreate {
            document,
            created_by,
            ..
        } => {
            assert_eq!(document.document_type, DocumentType::Other);
            assert!(document.tags.is_empty());
            assert!(!document.is_public);
            assert!(created_by.is_none());
        }
        other => panic!("unexpected command {:?}", other),
    }
}

#[test]
fn test_document_list_query_defaults() {
    let cmd: Command = serde_json::from_value(json!({
        "DocumentList": {"project": "p", "query": {"sort_by": "access_count"}}
    }))
    .unwrap();
    match cmd {
        Command::DocumentList { query, .. } => {
            assert_eq!(query.sort_by, SortField::AccessCount);
            assert_eq!(query.skip, 0);
            assert!(query.limit.is_none());
        }
        other => panic!("unexpected command {:?}", other),
    }

    let bare: Command = serde_json::from_value(json!({"DocumentList": {"project": "p"}})).unwrap();
    assert!(matches!(bare, Command::DocumentList { .. }));
}

#[test]
fn test_unknown_sort_field_is_rejected_at_parse() {
    let parsed: Result<Command, _> = serde_json::from_value(json!({
        "DocumentList": {"project": "p", "query": {"sort_by": "popularity"}}
    }));
    assert!(parsed.is_err());
}

#[test]
fn test_unknown_fields_are_rejected() {
    let parsed: Result<Command, _> = serde_json::from_value(json!({
        "SessionList": {"project": "p", "extra": 1}
    }));
    assert!(parsed.is_err());
}

#[test]
fn test_response_shape() {
    let ok = Response::success("pong", Output::Pong { version: "1".into() });
    assert_eq!(
        serde_json::to_value(&ok).unwrap(),
        json!({"status": "success", "message": "pong", "data": {"Pong": {"version": "1"}}})
    );

    let err = Response::from_error(&crate::Error::not_found("document x"));
    let value = serde_json::to_value(&err).unwrap();
    assert_eq!(value["status"], "not_found");
    assert!(value.get("data").is_none());
    assert_eq!(err.status, Status::NotFound);
}
