//! # dox-api
//!
//! HTTP API layer for dox built on Axum.
//!
//! Provides the drive/folder/document endpoints, the strict JSON extractor,
//! request logging, CORS and compression layers, the static asset fallback,
//! the mapping from store errors to HTTP responses, and the accept loop.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;
pub mod state;

pub use app::build_app;
pub use error::ApiError;
pub use server::serve;
pub use state::AppState;
