//! Custom Axum extractors.

pub mod json;
pub mod path;
pub mod query;

pub use json::StrictJson;
pub use path::DocumentPath;
