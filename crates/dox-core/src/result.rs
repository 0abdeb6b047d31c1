//! Convenience result type alias for dox.

use crate::error::AppError;

/// A specialized `Result` type for dox operations.
pub type AppResult<T> = Result<T, AppError>;
