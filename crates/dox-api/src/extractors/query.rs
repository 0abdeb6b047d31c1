//! Query string extraction for the drive listing.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Query};
use axum::http::Uri;
use axum::http::request::Parts;

use crate::dto::request::DriveQuery;

const PARENT_ID: &str = "parent_id";

impl<S> FromRequestParts<S> for DriveQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(drive_query(&parts.uri))
    }
}

/// First `parent_id` value wins; other keys are ignored and an unparsable
/// query string reads as empty.
fn drive_query(uri: &Uri) -> DriveQuery {
    let pairs = match Query::<Vec<(String, String)>>::try_from_uri(uri) {
        Ok(Query(pairs)) => pairs,
        Err(rejection) => {
            tracing::debug!(%rejection, "Ignoring unparsable query string");
            Vec::new()
        }
    };

    DriveQuery {
        parent_id: pairs
            .into_iter()
            .find(|(key, _)| key == PARENT_ID)
            .map(|(_, value)| value),
    }
}
