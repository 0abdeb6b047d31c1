//! # dox-database
//!
//! PostgreSQL connection management, embedded migrations, and the
//! repositories behind the [`DriveStore`] seam.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::{DriveStore, PgDriveStore};
