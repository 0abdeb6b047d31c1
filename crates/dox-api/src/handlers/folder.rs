//! Folder creation handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use dox_entity::{CreateFolder, Folder};

use crate::dto::request::CreateFolderRequest;
use crate::error::ApiError;
use crate::extractors::StrictJson;
use crate::state::AppState;

const CREATE_FAILED: &str = "failed to create folder";

/// POST /api/folders
pub async fn create_folder(
    State(state): State<AppState>,
    StrictJson(req): StrictJson<CreateFolderRequest>,
) -> Result<(StatusCode, Json<Folder>), ApiError> {
    // The name is validated before the parent reference is looked at.
    let mut data = CreateFolder::new(req.name.as_deref().unwrap_or_default(), None)?;
    data.parent_id = super::parse_folder_ref(req.parent_id.as_deref(), CREATE_FAILED)?;

    let folder = state
        .store
        .create_folder(data)
        .await
        .map_err(|e| ApiError::internal(&e, CREATE_FAILED))?;

    tracing::debug!(folder_id = %folder.id, "Folder created");
    Ok((StatusCode::CREATED, Json(folder)))
}
