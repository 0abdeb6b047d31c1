//! Drive listing handler.

use axum::Json;
use axum::extract::State;

use dox_core::types::FolderId;
use dox_entity::DriveListing;

use crate::dto::request::DriveQuery;
use crate::error::ApiError;
use crate::state::AppState;

const LOAD_FAILED: &str = "failed to load drive";

/// GET /api/drive?parent_id=...
pub async fn list_drive(
    State(state): State<AppState>,
    query: DriveQuery,
) -> Result<Json<DriveListing>, ApiError> {
    let parent_id = parse_parent_id(query.parent_id.as_deref())?;

    let listing = state
        .store
        .list_drive(parent_id)
        .await
        .map_err(|e| ApiError::internal(&e, LOAD_FAILED))?;

    Ok(Json(listing))
}

/// Trimmed; blank or absent means the root.
fn parse_parent_id(raw: Option<&str>) -> Result<Option<FolderId>, ApiError> {
    let trimmed = raw.map(str::trim).filter(|id| !id.is_empty());
    super::parse_folder_ref(trimmed, LOAD_FAILED)
}
