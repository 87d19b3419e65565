//! Access log line per request.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info, warn};

/// Emit one event per request with its outcome and latency.
///
/// Only the path is logged; query strings can carry scout ids and dates.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let latency_ms = started.elapsed().as_secs_f64() * 1000.0;
    match status {
        500.. => warn!(%method, %path, status, latency_ms, "Request failed"),
        _ => info!(%method, %path, status, latency_ms, "Request served"),
    }

    response
}
