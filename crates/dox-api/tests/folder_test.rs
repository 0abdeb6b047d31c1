//! Integration tests for folder creation.

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_folder_trims_name() {
    let app = common::TestApp::new();

    let response = app
        .request("POST", "/api/folders", Some(json!({ "name": "  Reports  " })))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.content_type.as_deref(), Some("application/json"));
    assert_eq!(response.body["name"], "Reports");
    assert!(response.body["parent_id"].is_null());
    assert!(response.body["id"].as_str().is_some());
    assert!(response.body["created_at"].as_str().is_some());
    assert!(response.body["updated_at"].as_str().is_some());
}

#[tokio::test]
async fn test_create_nested_folder() {
    let app = common::TestApp::new();
    let parent = app.create_folder("Projects", None).await;
    let parent_id = parent["id"].as_str().expect("id");

    let child = app.create_folder("Alpha", Some(parent_id)).await;

    assert_eq!(child["parent_id"], parent_id);
}

#[tokio::test]
async fn test_blank_name_rejected_and_not_persisted() {
    let app = common::TestApp::new();

    for body in [json!({ "name": "" }), json!({ "name": "   \t" }), json!({})] {
        let response = app.request("POST", "/api/folders", Some(body)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error(), "folder name is required");
    }

    assert_eq!(app.store.folder_count(), 0);
}

#[tokio::test]
async fn test_unknown_field_rejected() {
    let app = common::TestApp::new();

    let response = app
        .request("POST", "/api/folders", Some(json!({ "name": "X", "bogus": 1 })))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "invalid JSON payload");
    assert_eq!(app.store.folder_count(), 0);
}

#[tokio::test]
async fn test_trailing_json_rejected() {
    let app = common::TestApp::new();

    let response = app
        .raw_request("POST", "/api/folders", r#"{"name":"A"}{"name":"B"}"#)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "invalid JSON payload");
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let app = common::TestApp::new();

    let response = app.raw_request("POST", "/api/folders", "{\"name\":").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "invalid JSON payload");
}

#[tokio::test]
async fn test_repeated_key_keeps_last_value() {
    let app = common::TestApp::new();

    let response = app
        .raw_request("POST", "/api/folders", r#"{"name":"a","name":"b"}"#)
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["name"], "b");
}

#[tokio::test]
async fn test_null_body_is_missing_name() {
    let app = common::TestApp::new();

    let response = app.raw_request("POST", "/api/folders", "null").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "folder name is required");
}

#[tokio::test]
async fn test_malformed_parent_fails_creation() {
    let app = common::TestApp::new();

    for parent in ["", "not-a-uuid"] {
        let response = app
            .request(
                "POST",
                "/api/folders",
                Some(json!({ "name": "Orphan", "parent_id": parent })),
            )
            .await;
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.body, json!({ "error": "failed to create folder" }));
    }
    assert_eq!(app.store.folder_count(), 0);

    // Name validation answers first.
    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(json!({ "name": " ", "parent_id": "not-a-uuid" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "folder name is required");
}

#[tokio::test]
async fn test_non_string_name_rejected() {
    let app = common::TestApp::new();

    let response = app
        .request("POST", "/api/folders", Some(json!({ "name": 42 })))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "invalid JSON payload");
}

#[tokio::test]
async fn test_store_failure_is_opaque() {
    let app = common::TestApp::new();
    app.break_store();

    let response = app
        .request("POST", "/api/folders", Some(json!({ "name": "Docs" })))
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, json!({ "error": "failed to create folder" }));
}
