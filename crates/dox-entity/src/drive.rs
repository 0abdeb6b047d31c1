//! Single-level drive listing.

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::folder::Folder;

/// The folders and documents directly under one parent (or the root).
///
/// Built per request and never persisted. Documents in a listing carry no
/// `content`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DriveListing {
    /// Child folders, ordered by name.
    pub folders: Vec<Folder>,
    /// Child documents, most recently updated first.
    pub documents: Vec<Document>,
}
