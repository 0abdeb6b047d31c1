//! Route handlers organized by domain.

pub mod document;
pub mod drive;
pub mod folder;
pub mod health;

use dox_core::types::FolderId;

use crate::error::ApiError;

/// Fallback for a known API path hit with an unsupported method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}

/// Parse an optional folder reference from a request.
///
/// A reference that is not a well-formed ID fails the operation with its
/// opaque 500 `failure`, the same answer the database gives for it.
pub(crate) fn parse_folder_ref(
    raw: Option<&str>,
    failure: &str,
) -> Result<Option<FolderId>, ApiError> {
    raw.map(str::parse::<FolderId>)
        .transpose()
        .map_err(|err| {
            tracing::warn!(error = %err, "{failure}: malformed folder reference");
            ApiError::server_error(failure)
        })
}
