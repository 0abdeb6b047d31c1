//! PostgreSQL connection pool management.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{info, warn};

use dox_core::config::DatabaseConfig;
use dox_core::error::{AppError, ErrorKind};

/// Wrapper around the sqlx PostgreSQL connection pool.
///
/// Created once at startup and handed to the store explicitly; closed on
/// shutdown.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Create the pool and verify the database answers a ping.
    ///
    /// Connecting and pinging together are bounded by
    /// `ping_timeout_seconds`.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        if config.uses_default_url() {
            warn!(
                url = %config.connection_url(),
                "DATABASE_URL not set, using default local database"
            );
        }

        let url = config.connection_url();
        info!(
            url = %mask_password(url),
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            "Connecting to PostgreSQL"
        );

        let bound = Duration::from_secs(config.ping_timeout_seconds);

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(bound)
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
            .connect_lazy(url)
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Invalid database URL: {e}"),
                    e,
                )
            })?;

        let db = Self { pool };

        tokio::time::timeout(bound, db.health_check())
            .await
            .map_err(|_| {
                AppError::timeout(format!(
                    "Database ping did not answer within {}s",
                    bound.as_secs()
                ))
            })??;

        info!("Successfully connected to PostgreSQL");
        Ok(db)
    }

    /// Return a reference to the underlying sqlx pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Check database connectivity.
    pub async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Database ping failed", e))
    }

    /// Close all connections in the pool.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}

/// Mask the password portion of a database URL for safe logging.
fn mask_password(url: &str) -> String {
    if let Some(at_pos) = url.find('@') {
        if let Some(colon_pos) = url[..at_pos].rfind(':') {
            let scheme_end = url.find("://").map(|p| p + 3).unwrap_or(0);
            if colon_pos > scheme_end {
                return format!("{}:****@{}", &url[..colon_pos], &url[at_pos + 1..]);
            }
        }
    }
    url.to_string()
}
