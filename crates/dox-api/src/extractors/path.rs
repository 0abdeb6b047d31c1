//! The `{id}` segment of document routes.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use dox_core::types::DocumentId;

/// Document ID taken from the path, `None` when the segment is not a
/// well-formed ID (including segments that are not valid UTF-8).
///
/// Never rejects: what a malformed ID means is up to the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentPath(pub Option<DocumentId>);

impl<S> FromRequestParts<S> for DocumentPath
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let id = match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => parse_document_id(&raw),
            Err(rejection) => {
                tracing::debug!(%rejection, "Unreadable document path");
                None
            }
        };

        Ok(Self(id))
    }
}

/// Parse a document ID from a path segment, verbatim.
pub fn parse_document_id(s: &str) -> Option<DocumentId> {
    s.parse().ok()
}
