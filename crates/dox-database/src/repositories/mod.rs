//! Repository implementations for dox entities.

pub mod document;
pub mod folder;

pub use document::DocumentRepository;
pub use folder::FolderRepository;
