//! Document CRUD handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use dox_core::error::AppError;
use dox_entity::{CreateDocument, Document, UpdateDocument};

use crate::dto::request::{CreateDocumentRequest, UpdateDocumentRequest};
use crate::error::ApiError;
use crate::extractors::{DocumentPath, StrictJson};
use crate::state::AppState;

const DOCUMENT_NOT_FOUND: &str = "document not found";
const CREATE_FAILED: &str = "failed to create document";
const LOAD_FAILED: &str = "failed to load document";
const UPDATE_FAILED: &str = "failed to update document";

/// POST /api/documents
pub async fn create_document(
    State(state): State<AppState>,
    StrictJson(req): StrictJson<CreateDocumentRequest>,
) -> Result<(StatusCode, Json<Document>), ApiError> {
    let folder_id = super::parse_folder_ref(req.folder_id.as_deref(), CREATE_FAILED)?;
    let data = CreateDocument::new(
        req.title.as_deref().unwrap_or_default(),
        req.content.unwrap_or_default(),
        folder_id,
    );

    let doc = state
        .store
        .create_document(data)
        .await
        .map_err(|e| ApiError::internal(&e, CREATE_FAILED))?;

    tracing::debug!(document_id = %doc.id, "Document created");
    Ok((StatusCode::CREATED, Json(doc)))
}

/// GET /api/documents/{id}
pub async fn get_document(
    State(state): State<AppState>,
    DocumentPath(id): DocumentPath,
) -> Result<Json<Document>, ApiError> {
    let id = id.ok_or_else(|| malformed_id(LOAD_FAILED))?;

    let doc = state
        .store
        .get_document(id)
        .await
        .map_err(|e| store_error(e, LOAD_FAILED))?;

    Ok(Json(doc))
}

/// PUT /api/documents/{id}
///
/// The body is decoded before the path ID is checked.
pub async fn update_document(
    State(state): State<AppState>,
    DocumentPath(id): DocumentPath,
    StrictJson(req): StrictJson<UpdateDocumentRequest>,
) -> Result<Json<Document>, ApiError> {
    let id = id.ok_or_else(|| malformed_id(UPDATE_FAILED))?;
    let folder_id = super::parse_folder_ref(req.folder_id.as_deref(), UPDATE_FAILED)?;
    let data = UpdateDocument::new(
        req.title.as_deref().unwrap_or_default(),
        req.content.unwrap_or_default(),
        folder_id,
    );

    let doc = state
        .store
        .update_document(id, data)
        .await
        .map_err(|e| store_error(e, UPDATE_FAILED))?;

    Ok(Json(doc))
}

/// Any request to `/api/documents/` without an ID.
pub async fn missing_id() -> ApiError {
    ApiError::not_found("not found")
}

fn malformed_id(failure: &str) -> ApiError {
    tracing::warn!("{failure}: malformed document id");
    ApiError::server_error(failure)
}

fn store_error(err: AppError, failure: &str) -> ApiError {
    if err.is_not_found() {
        ApiError::not_found(DOCUMENT_NOT_FOUND)
    } else {
        ApiError::internal(&err, failure)
    }
}
