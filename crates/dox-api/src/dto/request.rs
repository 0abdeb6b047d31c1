//! Request DTOs.
//!
//! All bodies reject unknown fields. Absent or `null` text fields read as
//! empty strings. Folder references stay raw strings here; the handlers
//! parse them.

use serde::Deserialize;

/// Create folder request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CreateFolderRequest {
    /// Folder name; trimmed, must not be blank.
    pub name: Option<String>,
    /// Parent folder ID (omit or null for root).
    pub parent_id: Option<String>,
}

/// Create document request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CreateDocumentRequest {
    /// Title; blank becomes "Untitled".
    pub title: Option<String>,
    /// Containing folder (omit or null for root).
    pub folder_id: Option<String>,
    /// Text body.
    pub content: Option<String>,
}

/// Update document request. Every field is written back.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UpdateDocumentRequest {
    /// New title; blank becomes "Untitled".
    pub title: Option<String>,
    /// New containing folder; omitted or null moves the document to the root.
    pub folder_id: Option<String>,
    /// New text body; omitted or null clears it.
    pub content: Option<String>,
}

/// Query string of `GET /api/drive`.
///
/// Extracted by hand (see `extractors::query`), never rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriveQuery {
    /// Folder to list; blank or absent lists the root.
    pub parent_id: Option<String>,
}
