//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use dox_core::error::AppError;
use dox_core::types::FolderId;

/// A folder in the drive hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Folder {
    /// Unique folder identifier.
    pub id: FolderId,
    /// Parent folder ID (null for root folders).
    pub parent_id: Option<FolderId>,
    /// Folder name.
    pub name: String,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// When the folder was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolder {
    /// Parent folder (None for root).
    pub parent_id: Option<FolderId>,
    /// Folder name, trimmed and non-empty.
    pub name: String,
}

impl CreateFolder {
    /// Build a creation request, trimming `name`.
    ///
    /// A name that is empty after trimming is rejected.
    pub fn new(name: &str, parent_id: Option<FolderId>) -> Result<Self, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("folder name is required"));
        }

        Ok(Self {
            parent_id,
            name: name.to_string(),
        })
    }
}
