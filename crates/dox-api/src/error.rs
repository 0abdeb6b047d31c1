//! Maps domain errors to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use dox_core::error::{AppError, ErrorKind};

use crate::dto::response::ErrorResponse;

/// Message for any body that is not exactly one acceptable JSON object.
pub const INVALID_JSON: &str = "invalid JSON payload";

/// An HTTP error with the message exposed to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Response status.
    pub status: StatusCode,
    /// Client-facing message, rendered as `{"error": message}`.
    pub message: String,
}

impl ApiError {
    /// Create an error with an explicit status.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// 400 Bad Request.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// 404 Not Found.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// 405 Method Not Allowed.
    pub fn method_not_allowed() -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, "method not allowed")
    }

    /// Log `err` and hide it behind an opaque 500 `message`.
    pub fn internal(err: &AppError, message: &str) -> Self {
        tracing::error!(
            kind = %err.kind,
            error = %err.message,
            source = ?err.source,
            "{message}"
        );
        Self::server_error(message)
    }

    /// Opaque 500 with nothing to log.
    pub fn server_error(message: &str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        match err.kind {
            ErrorKind::Validation => Self::bad_request(err.message),
            ErrorKind::NotFound => Self::not_found(err.message),
            _ => Self::internal(&err, "internal server error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.message,
        };

        (self.status, Json(body)).into_response()
    }
}
