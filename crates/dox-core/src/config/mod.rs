//! Application configuration schemas.
//!
//! Configuration is assembled by the `config` crate from built-in defaults,
//! optional TOML files, and environment variables. Each sub-module holds one
//! logical section.

pub mod app;
pub mod database;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::database::{DEFAULT_DATABASE_URL, DatabaseConfig};
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Environment variable holding the PostgreSQL connection string.
///
/// Takes precedence over `database.url` from files and `DOX__` variables.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database connection settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Sources, lowest priority first: built-in defaults,
    /// `config/default.toml`, `config/{env}.toml`, variables prefixed with
    /// `DOX__` (e.g. `DOX__SERVER__PORT`), and finally `DATABASE_URL`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("DOX")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let mut config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.apply_database_url(std::env::var(DATABASE_URL_ENV).ok());
        Ok(config)
    }

    /// Override the database URL when a non-blank value is given.
    pub fn apply_database_url(&mut self, url: Option<String>) {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.database.url = Some(url);
        }
    }
}
