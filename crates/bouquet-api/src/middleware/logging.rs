//! Request completion logging.
//!
//! One line per handled request. Severity follows the response class,
//! so failing traffic stands out in the log stream without a separate
//! filter.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{error, info, warn};

/// Logs every completed request with its status and latency.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis() as u64;

    if status.is_server_error() {
        error!(%method, path, status = status.as_u16(), elapsed_ms, "Request failed");
    } else if status.is_client_error() {
        warn!(%method, path, status = status.as_u16(), elapsed_ms, "Request rejected");
    } else {
        info!(%method, path, status = status.as_u16(), elapsed_ms, "Request completed");
    }

    response
}
