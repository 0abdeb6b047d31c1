//! `StrictJson` extractor: exactly one JSON value, nothing after it.

use axum::extract::{FromRequest, Request};
use bytes::Bytes;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{ApiError, INVALID_JSON};

/// Like `axum::Json`, but rejects trailing content after the first value
/// and reports every failure (oversized body included) as
/// 400 `invalid JSON payload`. The `Content-Type` header is not inspected.
///
/// Unknown fields are rejected by the target type's
/// `#[serde(deny_unknown_fields)]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictJson<T>(pub T);

impl<T, S> FromRequest<S> for StrictJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(%rejection, "Failed to read request body");
            ApiError::bad_request(INVALID_JSON)
        })?;

        decode(&body).map(StrictJson)
    }
}

/// Decode a single JSON value from `body`, allowing only trailing whitespace.
///
/// A key repeated within an object keeps its last value, and a bare `null`
/// reads as an empty object.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    let mut de = serde_json::Deserializer::from_slice(body);

    let value = Value::deserialize(&mut de)
        .and_then(|value| de.end().map(|()| value))
        .and_then(|value| match value {
            Value::Null => serde_json::from_value(Value::Object(Map::new())),
            value => serde_json::from_value(value),
        });

    value.map_err(|err| {
        tracing::debug!(error = %err, "Rejected JSON payload");
        ApiError::bad_request(INVALID_JSON)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(deny_unknown_fields)]
    struct Payload {
        name: String,
    }

    #[test]
    fn test_accepts_single_object_with_whitespace() {
        let value: Payload = decode(b"  {\"name\":\"a\"}\n\t ").expect("valid");
        assert_eq!(value.name, "a");
    }

    #[test]
    fn test_rejects_second_value() {
        let err = decode::<Payload>(br#"{"name":"a"}{"name":"b"}"#).unwrap_err();
        assert_eq!(err, ApiError::bad_request(INVALID_JSON));
    }

    #[test]
    fn test_rejects_trailing_garbage() {
        assert!(decode::<Payload>(br#"{"name":"a"} x"#).is_err());
    }

    #[test]
    fn test_rejects_empty_and_malformed() {
        assert!(decode::<Payload>(b"").is_err());
        assert!(decode::<Payload>(b"{\"name\":").is_err());
    }

    #[test]
    fn test_repeated_key_keeps_last_value() {
        let value: Payload = decode(br#"{"name":"a","name":"b"}"#).expect("valid");
        assert_eq!(value.name, "b");
    }

    #[test]
    fn test_null_reads_as_empty_object() {
        #[derive(Debug, Default, Deserialize)]
        #[serde(default, deny_unknown_fields)]
        struct Optional {
            name: Option<String>,
        }

        let value: Optional = decode(b" null ").expect("valid");
        assert!(value.name.is_none());
        assert!(decode::<Payload>(b"null").is_err());
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(decode::<Payload>(b"[]").is_err());
        assert!(decode::<Payload>(br#""name""#).is_err());
    }

    #[test]
    fn test_rejects_unknown_field() {
        assert!(decode::<Payload>(br#"{"name":"a","extra":true}"#).is_err());
    }
}
