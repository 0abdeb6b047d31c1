//! Document repository implementation.

use sqlx::PgPool;

use dox_core::error::{AppError, ErrorKind};
use dox_core::result::AppResult;
use dox_core::types::{DocumentId, FolderId};
use dox_entity::document::{CreateDocument, Document, UpdateDocument};

/// Repository for document rows.
#[derive(Debug, Clone)]
pub struct DocumentRepository {
    pool: PgPool,
}

impl DocumentRepository {
    /// Create a new document repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List documents in `folder_id`, or at the root when `None`, most
    /// recently updated first. `content` is not loaded.
    pub async fn find_in_folder(&self, folder_id: Option<FolderId>) -> AppResult<Vec<Document>> {
        sqlx::query_as::<_, Document>(
            "SELECT id, folder_id, title, created_at, updated_at FROM documents \
             WHERE ($1::uuid IS NULL AND folder_id IS NULL) OR folder_id = $1 ORDER BY updated_at DESC",
        )
        .bind(folder_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list documents", e))
    }

    /// Find a document by ID, including its content.
    pub async fn find_by_id(&self, id: DocumentId) -> AppResult<Option<Document>> {
        sqlx::query_as::<_, Document>(
            "SELECT id, folder_id, title, content, created_at, updated_at \
             FROM documents WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find document", e))
    }

    /// Create a new document.
    pub async fn create(&self, data: &CreateDocument) -> AppResult<Document> {
        sqlx::query_as::<_, Document>(
            "INSERT INTO documents (title, content, folder_id) VALUES ($1, $2, $3) \
             RETURNING id, folder_id, title, content, created_at, updated_at",
        )
        .bind(&data.title)
        .bind(&data.content)
        .bind(data.folder_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create document", e))
    }

    /// Overwrite title, content and folder, refreshing `updated_at`.
    pub async fn update(&self, id: DocumentId, data: &UpdateDocument) -> AppResult<Document> {
        sqlx::query_as::<_, Document>(
            "UPDATE documents SET title = $2, content = $3, folder_id = $4, updated_at = NOW() \
             WHERE id = $1 RETURNING id, folder_id, title, content, created_at, updated_at",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.content)
        .bind(data.folder_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update document", e))?
        .ok_or_else(|| AppError::not_found(format!("Document {id} not found")))
    }
}
