//! Database configuration.

use serde::{Deserialize, Serialize};

/// Connection string used when none is configured.
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/dox?sslmode=disable";

/// Database connection pool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL. Falls back to [`DEFAULT_DATABASE_URL`].
    pub url: Option<String>,
    /// Maximum number of connections in the pool.
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    pub min_connections: u32,
    /// Startup connect + ping bound in seconds.
    pub ping_timeout_seconds: u64,
    /// Idle connection timeout in seconds.
    pub idle_timeout_seconds: u64,
    /// Per-call bound on store operations in seconds.
    pub query_timeout_seconds: u64,
    /// Apply embedded migrations when the server starts.
    pub auto_migrate: bool,
}

impl DatabaseConfig {
    /// The connection string to use.
    pub fn connection_url(&self) -> &str {
        self.url
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or(DEFAULT_DATABASE_URL)
    }

    /// Whether [`connection_url`](Self::connection_url) is the built-in default.
    pub fn uses_default_url(&self) -> bool {
        self.url.as_deref().is_none_or(|u| u.trim().is_empty())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 20,
            min_connections: 1,
            ping_timeout_seconds: 5,
            idle_timeout_seconds: 300,
            query_timeout_seconds: 3,
            auto_migrate: false,
        }
    }
}
