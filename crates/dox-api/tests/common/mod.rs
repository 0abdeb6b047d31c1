//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, Utc};
use serde_json::Value;
use tower::ServiceExt;

use dox_api::AppState;
use dox_core::config::AppConfig;
use dox_core::error::AppError;
use dox_core::result::AppResult;
use dox_core::types::{DocumentId, FolderId};
use dox_database::DriveStore;
use dox_entity::{CreateDocument, CreateFolder, Document, DriveListing, Folder, UpdateDocument};

/// In-memory [`DriveStore`] with the same ordering and not-found rules as
/// the PostgreSQL store.
#[derive(Default)]
pub struct MemoryStore {
    folders: Mutex<Vec<Folder>>,
    documents: Mutex<Vec<Document>>,
    /// When set, every call fails with a database error.
    pub fail: Mutex<bool>,
}

impl MemoryStore {
    fn check(&self) -> AppResult<()> {
        if *self.fail.lock().expect("lock") {
            return Err(AppError::database("connection refused"));
        }
        Ok(())
    }

    pub fn folder_count(&self) -> usize {
        self.folders.lock().expect("lock").len()
    }

    /// Strictly after `previous`, even on coarse clocks.
    fn tick(previous: DateTime<Utc>) -> DateTime<Utc> {
        let now = Utc::now();
        if now > previous {
            now
        } else {
            previous + chrono::Duration::microseconds(1)
        }
    }
}

#[async_trait]
impl DriveStore for MemoryStore {
    async fn list_drive(&self, parent_id: Option<FolderId>) -> AppResult<DriveListing> {
        self.check()?;

        let mut folders: Vec<Folder> = self
            .folders
            .lock()
            .expect("lock")
            .iter()
            .filter(|f| f.parent_id == parent_id)
            .cloned()
            .collect();
        folders.sort_by(|a, b| a.name.cmp(&b.name));

        let mut documents: Vec<Document> = self
            .documents
            .lock()
            .expect("lock")
            .iter()
            .filter(|d| d.folder_id == parent_id)
            .map(|d| Document {
                content: None,
                ..d.clone()
            })
            .collect();
        documents.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

        Ok(DriveListing { folders, documents })
    }

    async fn create_folder(&self, data: CreateFolder) -> AppResult<Folder> {
        self.check()?;
        let now = Utc::now();
        let folder = Folder {
            id: FolderId::new(),
            parent_id: data.parent_id,
            name: data.name,
            created_at: now,
            updated_at: now,
        };
        self.folders.lock().expect("lock").push(folder.clone());
        Ok(folder)
    }

    async fn create_document(&self, data: CreateDocument) -> AppResult<Document> {
        self.check()?;
        let now = Utc::now();
        let doc = Document {
            id: DocumentId::new(),
            folder_id: data.folder_id,
            title: data.title,
            content: Some(data.content),
            created_at: now,
            updated_at: now,
        };
        self.documents.lock().expect("lock").push(doc.clone());
        Ok(doc)
    }

    async fn get_document(&self, id: DocumentId) -> AppResult<Document> {
        self.check()?;
        self.documents
            .lock()
            .expect("lock")
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Document {id} not found")))
    }

    async fn update_document(&self, id: DocumentId, data: UpdateDocument) -> AppResult<Document> {
        self.check()?;
        let mut documents = self.documents.lock().expect("lock");
        let doc = documents
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| AppError::not_found(format!("Document {id} not found")))?;

        doc.title = data.title;
        doc.content = Some(data.content);
        doc.folder_id = data.folder_id;
        doc.updated_at = Self::tick(doc.updated_at);
        Ok(doc.clone())
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Backing store for direct inspection
    pub store: Arc<MemoryStore>,
}

impl TestApp {
    /// Create a new test application with default configuration
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a test application with a custom configuration
    pub fn with_config(config: AppConfig) -> Self {
        let store = Arc::new(MemoryStore::default());
        let state = AppState::new(config, Arc::clone(&store) as Arc<dyn DriveStore>);

        Self {
            router: dox_api::build_app(state),
            store,
        }
    }

    /// Make every store call fail from now on
    pub fn break_store(&self) {
        *self.store.fail.lock().expect("lock") = true;
    }

    /// Make an HTTP request with a JSON body to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.raw_request(method, path, body_str).await
    }

    /// Make an HTTP request with a verbatim body
    pub async fn raw_request(
        &self,
        method: &str,
        path: &str,
        body: impl Into<Body>,
    ) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(body.into())
            .expect("Failed to build request");

        let response = tokio::time::timeout(
            Duration::from_secs(5),
            self.router.clone().oneshot(req),
        )
        .await
        .expect("request timed out")
        .expect("Failed to send request");

        let status = response.status();
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body_bytes = axum::body::to_bytes(response.into_body(), 4 * 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            content_type,
            body,
            raw: body_bytes.to_vec(),
        }
    }

    /// Create a folder through the API and return its JSON
    pub async fn create_folder(&self, name: &str, parent_id: Option<&str>) -> Value {
        let response = self
            .request(
                "POST",
                "/api/folders",
                Some(serde_json::json!({ "name": name, "parent_id": parent_id })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body
    }

    /// Create a document through the API and return its JSON
    pub async fn create_document(&self, body: Value) -> Value {
        let response = self.request("POST", "/api/documents", Some(body)).await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// `Content-Type` header, if any
    pub content_type: Option<String>,
    /// Parsed JSON body (`Null` when not JSON)
    pub body: Value,
    /// Raw body bytes
    pub raw: Vec<u8>,
}

impl TestResponse {
    /// The `error` message of a JSON error body
    pub fn error(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}
