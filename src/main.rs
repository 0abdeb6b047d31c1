//! dox server: folder and document drive API
//!
//! Main entry point that wires all crates together and starts the server.

mod cli;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use dox_api::AppState;
use dox_core::config::AppConfig;
use dox_core::error::AppError;
use dox_database::{DatabasePool, PgDriveStore};

use crate::cli::{Cli, Commands, ServeArgs};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load(&cli.env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!("Loaded configuration (env: {})", cli.env);

    let result = match cli.command() {
        Commands::Serve(args) => run(config, args).await,
        Commands::Migrate => migrate(config).await,
    };

    if let Err(e) = result {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Apply embedded migrations and exit.
async fn migrate(config: AppConfig) -> Result<(), AppError> {
    let db = DatabasePool::connect(&config.database).await?;
    dox_database::migration::run_migrations(db.pool()).await?;
    db.close().await;
    Ok(())
}

/// Main server run function
async fn run(mut config: AppConfig, args: ServeArgs) -> Result<(), AppError> {
    tracing::info!("Starting dox v{}", env!("CARGO_PKG_VERSION"));

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host {
        config.server.host = host;
    }

    // ── Step 1: Database connection ──────────────────────────────
    let db = DatabasePool::connect(&config.database).await?;

    if args.migrate || config.database.auto_migrate {
        dox_database::migration::run_migrations(db.pool()).await?;
    }

    // ── Step 2: Store + state ────────────────────────────────────
    let store = Arc::new(PgDriveStore::new(
        db.pool().clone(),
        Duration::from_secs(config.database.query_timeout_seconds),
    ));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let header_read_timeout = Duration::from_secs(config.server.header_read_timeout_seconds);
    let app = dox_api::build_app(AppState::new(config, store));

    // ── Step 3: Serve until a shutdown signal ────────────────────
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("dox server listening on {}", addr);

    dox_api::serve(listener, app, header_read_timeout, async {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
    })
    .await
    .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    db.close().await;
    tracing::info!("dox server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
