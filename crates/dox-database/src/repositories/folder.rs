//! Folder repository implementation.

use sqlx::PgPool;

use dox_core::error::{AppError, ErrorKind};
use dox_core::result::AppResult;
use dox_core::types::FolderId;
use dox_entity::folder::{CreateFolder, Folder};

/// Repository for folder rows.
#[derive(Debug, Clone)]
pub struct FolderRepository {
    pool: PgPool,
}

impl FolderRepository {
    /// Create a new folder repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List direct children of `parent_id`, or the root folders when `None`,
    /// ordered by name.
    pub async fn find_children(&self, parent_id: Option<FolderId>) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(
            "SELECT id, parent_id, name, created_at, updated_at FROM folders \
             WHERE ($1::uuid IS NULL AND parent_id IS NULL) OR parent_id = $1 ORDER BY name ASC",
        )
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list folders", e))
    }

    /// Create a new folder.
    ///
    /// The parent is not checked for cycles; a missing parent fails on the
    /// foreign key.
    pub async fn create(&self, data: &CreateFolder) -> AppResult<Folder> {
        sqlx::query_as::<_, Folder>(
            "INSERT INTO folders (name, parent_id) VALUES ($1, $2) \
             RETURNING id, parent_id, name, created_at, updated_at",
        )
        .bind(&data.name)
        .bind(data.parent_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create folder", e))
    }
}
