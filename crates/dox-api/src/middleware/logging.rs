//! Request/response logging middleware.

use std::time::{Duration, Instant};

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::info;

/// Logs request method, path, status, and latency at millisecond granularity.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    let latency = truncate_to_millis(start.elapsed());
    info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        latency = ?latency,
        "HTTP request"
    );

    response
}

fn truncate_to_millis(elapsed: Duration) -> Duration {
    Duration::from_millis(elapsed.as_millis() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_millis() {
        assert_eq!(
            truncate_to_millis(Duration::from_micros(12_999)),
            Duration::from_millis(12)
        );
        assert_eq!(truncate_to_millis(Duration::from_nanos(999_999)), Duration::ZERO);
        assert_eq!(format!("{:?}", truncate_to_millis(Duration::from_micros(3_400))), "3ms");
    }
}
