//! Application state shared across all handlers.

use std::sync::Arc;

use dox_core::config::AppConfig;
use dox_database::DriveStore;

/// Shared dependencies, passed to every Axum handler via `State<AppState>`.
///
/// Holds no per-request data; all fields are `Arc`-wrapped for cheap
/// cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Folder and document persistence
    pub store: Arc<dyn DriveStore>,
}

impl AppState {
    /// Create state from a configuration and a store.
    pub fn new(config: AppConfig, store: Arc<dyn DriveStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }
}
