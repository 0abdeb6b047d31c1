//! Embedded schema for the `folders` and `documents` tables.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use dox_core::error::{AppError, ErrorKind};
use dox_core::result::AppResult;

/// Migrations under `migrations/`, compiled into the binary.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Bring the drive schema up to the newest embedded version.
pub async fn run_migrations(pool: &PgPool) -> AppResult<()> {
    let target = MIGRATOR.iter().map(|m| m.version).max();
    info!(target_version = ?target, "Applying drive schema migrations");

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Drive schema migration failed: {e}"),
            e,
        )
    })?;

    info!("Drive schema is up to date");
    Ok(())
}
