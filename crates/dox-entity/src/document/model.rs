//! Document entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use dox_core::types::{DocumentId, FolderId};

/// Title stored when a document is saved with a blank title.
pub const UNTITLED: &str = "Untitled";

/// A text document, optionally placed inside a folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Document {
    /// Unique document identifier.
    pub id: DocumentId,
    /// Containing folder (null for root-level documents).
    pub folder_id: Option<FolderId>,
    /// Document title.
    pub title: String,
    /// Text body. `None` when loaded by a metadata-only listing query, in
    /// which case the field is left out of the JSON entirely.
    #[sqlx(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// When the document was created.
    pub created_at: DateTime<Utc>,
    /// When the document was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDocument {
    /// Target folder (None for root).
    pub folder_id: Option<FolderId>,
    /// Trimmed title, never empty.
    pub title: String,
    /// Text body, stored verbatim.
    pub content: String,
}

impl CreateDocument {
    /// Build a creation request. A blank title becomes [`UNTITLED`].
    pub fn new(title: &str, content: String, folder_id: Option<FolderId>) -> Self {
        Self {
            folder_id,
            title: normalize_title(title),
            content,
        }
    }
}

/// Replacement values for an existing document.
///
/// Every field is written; `folder_id: None` moves the document to the root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDocument {
    /// New containing folder.
    pub folder_id: Option<FolderId>,
    /// Trimmed title, never empty.
    pub title: String,
    /// New text body.
    pub content: String,
}

impl UpdateDocument {
    /// Build an update. A blank title becomes [`UNTITLED`].
    pub fn new(title: &str, content: String, folder_id: Option<FolderId>) -> Self {
        Self {
            folder_id,
            title: normalize_title(title),
            content,
        }
    }
}

fn normalize_title(title: &str) -> String {
    match title.trim() {
        "" => UNTITLED.to_string(),
        trimmed => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(content: Option<&str>) -> Document {
        let now = Utc::now();
        Document {
            id: DocumentId::new(),
            folder_id: None,
            title: "Notes".to_string(),
            content: content.map(str::to_string),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_blank_title_becomes_untitled() {
        for title in ["", "  ", "\n"] {
            let data = CreateDocument::new(title, String::new(), None);
            assert_eq!(data.title, UNTITLED);
        }
        assert_eq!(UpdateDocument::new(" ", String::new(), None).title, UNTITLED);
    }

    #[test]
    fn test_title_is_trimmed_content_is_not() {
        let data = CreateDocument::new("  Plan  ", "  body  ".to_string(), None);
        assert_eq!(data.title, "Plan");
        assert_eq!(data.content, "  body  ");
    }

    #[test]
    fn test_listing_document_omits_content() {
        let json = serde_json::to_value(sample(None)).expect("serialize");
        assert!(json.get("content").is_none());
        assert!(json.get("folder_id").expect("folder_id present").is_null());
    }

    #[test]
    fn test_empty_content_is_still_serialized() {
        let json = serde_json::to_value(sample(Some(""))).expect("serialize");
        assert_eq!(json["content"], "");
    }
}
