//! The data-access seam used by the HTTP layer.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;

use dox_core::error::AppError;
use dox_core::result::AppResult;
use dox_core::types::{DocumentId, FolderId};
use dox_entity::{CreateDocument, CreateFolder, Document, DriveListing, Folder, UpdateDocument};

use crate::repositories::{DocumentRepository, FolderRepository};

/// One operation per drive use case.
///
/// `get_document` and `update_document` report a missing row as
/// [`ErrorKind::NotFound`](dox_core::error::ErrorKind::NotFound); every other
/// failure is surfaced unchanged, without retries.
#[async_trait]
pub trait DriveStore: Send + Sync + 'static {
    /// Folders and documents directly under `parent_id` (root when `None`).
    async fn list_drive(&self, parent_id: Option<FolderId>) -> AppResult<DriveListing>;

    /// Insert a folder and return the persisted row.
    async fn create_folder(&self, data: CreateFolder) -> AppResult<Folder>;

    /// Insert a document and return the persisted row, content included.
    async fn create_document(&self, data: CreateDocument) -> AppResult<Document>;

    /// Fetch one document with its content.
    async fn get_document(&self, id: DocumentId) -> AppResult<Document>;

    /// Replace a document's title, content and folder.
    async fn update_document(&self, id: DocumentId, data: UpdateDocument) -> AppResult<Document>;
}

/// PostgreSQL-backed [`DriveStore`].
///
/// Each call is bounded by `query_timeout`, independent of whether the
/// caller is still waiting.
#[derive(Debug, Clone)]
pub struct PgDriveStore {
    folders: FolderRepository,
    documents: DocumentRepository,
    query_timeout: Duration,
}

impl PgDriveStore {
    /// Create a store over an existing pool.
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            folders: FolderRepository::new(pool.clone()),
            documents: DocumentRepository::new(pool),
            query_timeout,
        }
    }

    async fn bounded<T>(&self, fut: impl Future<Output = AppResult<T>>) -> AppResult<T> {
        tokio::time::timeout(self.query_timeout, fut)
            .await
            .map_err(|_| {
                AppError::timeout(format!(
                    "Query exceeded {}ms",
                    self.query_timeout.as_millis()
                ))
            })?
    }
}

#[async_trait]
impl DriveStore for PgDriveStore {
    async fn list_drive(&self, parent_id: Option<FolderId>) -> AppResult<DriveListing> {
        self.bounded(async {
            let folders = self.folders.find_children(parent_id).await?;
            let documents = self.documents.find_in_folder(parent_id).await?;
            Ok(DriveListing { folders, documents })
        })
        .await
    }

    async fn create_folder(&self, data: CreateFolder) -> AppResult<Folder> {
        self.bounded(self.folders.create(&data)).await
    }

    async fn create_document(&self, data: CreateDocument) -> AppResult<Document> {
        self.bounded(self.documents.create(&data)).await
    }

    async fn get_document(&self, id: DocumentId) -> AppResult<Document> {
        self.bounded(self.documents.find_by_id(id))
            .await?
            .ok_or_else(|| AppError::not_found(format!("Document {id} not found")))
    }

    async fn update_document(&self, id: DocumentId, data: UpdateDocument) -> AppResult<Document> {
        self.bounded(self.documents.update(id, &data)).await
    }
}
