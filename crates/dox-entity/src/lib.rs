//! # dox-entity
//!
//! Domain entity models for dox. `Folder` and `Document` are table rows and
//! derive `sqlx::FromRow`; `DriveListing` is a per-request aggregate that is
//! never stored.

pub mod document;
pub mod drive;
pub mod folder;

pub use document::{CreateDocument, Document, UpdateDocument};
pub use drive::DriveListing;
pub use folder::{CreateFolder, Folder};
