//! CORS policy from `server.cors`.

use std::str::FromStr;
use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowOrigin, Any, CorsLayer};

use dox_core::config::CorsConfig;

const WILDCARD: &str = "*";

/// Builds the CORS layer. A `"*"` entry allows any origin or header;
/// entries that do not parse are logged and skipped.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins = if is_wildcard(&config.allowed_origins) {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(parse_entries::<HeaderValue>(&config.allowed_origins, "origin"))
    };

    let headers = if is_wildcard(&config.allowed_headers) {
        AllowHeaders::from(Any)
    } else {
        AllowHeaders::list(parse_entries::<HeaderName>(&config.allowed_headers, "header"))
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(parse_entries::<Method>(&config.allowed_methods, "method"))
        .allow_headers(headers)
        .max_age(Duration::from_secs(config.max_age_seconds))
}

fn is_wildcard(entries: &[String]) -> bool {
    entries.iter().any(|entry| entry.trim() == WILDCARD)
}

fn parse_entries<T: FromStr>(entries: &[String], what: &str) -> Vec<T> {
    entries
        .iter()
        .filter_map(|entry| match entry.trim().parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(entry = %entry, "Ignoring invalid CORS {what}");
                None
            }
        })
        .collect()
}
