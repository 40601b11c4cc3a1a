//! Duplicate-request suppression middleware.
//!
//! Read endpoints can be hammered with identical requests (double-clicks,
//! retry storms). This middleware fingerprints each request by URL and
//! body, and replays the previously recorded response when the same
//! fingerprint arrives again within a short window. Only successful
//! responses are recorded, so an error never gets pinned into the cache.
//!
//! The cache itself is best-effort: any cache failure is logged and the
//! request passes through as if no entry existed.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{StatusCode, Uri, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use bouquet_cache::keys;
use bouquet_cache::provider::CacheManager;
use bouquet_core::error::AppError;
use bouquet_core::traits::cache::CacheProvider;

use crate::error::ApiError;

/// Upper bound on buffered request bodies for fingerprinting.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// State for the duplicate suppression layer.
///
/// Carried separately from `AppState` so the layer only touches the
/// cache and can be exercised without the rest of the application.
#[derive(Debug, Clone)]
pub struct RequestDedup {
    /// Cache holding recorded responses.
    cache: Arc<CacheManager>,
    /// How long a recorded response is replayed for.
    ttl: Duration,
}

impl RequestDedup {
    /// Creates the suppression state.
    pub fn new(cache: Arc<CacheManager>, ttl: Duration) -> Self {
        Self { cache, ttl }
    }
}

/// A recorded response, stored JSON-encoded in the cache.
#[derive(Debug, Serialize, Deserialize)]
struct CachedResponse {
    /// HTTP status code.
    status: u16,
    /// Content-Type header of the original response.
    content_type: Option<String>,
    /// Response body.
    body: String,
}

/// Hash of URL plus request body, hex-encoded.
fn fingerprint(uri: &Uri, body: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(uri.to_string().as_bytes());
    hasher.update(body);
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

/// Replays a recorded 2xx response for a repeated request, or passes the
/// request through and records the response if it was successful.
pub async fn suppress_duplicates(
    State(dedup): State<RequestDedup>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let (parts, body) = request.into_parts();
    let body_bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| AppError::bad_request(format!("Failed to read request body: {e}")))?;

    let key = keys::duplicate_request(&fingerprint(&parts.uri, &body_bytes));

    match dedup.cache.get(&key).await {
        Ok(Some(cached)) => match serde_json::from_str::<CachedResponse>(&cached) {
            Ok(record) => {
                debug!(path = %parts.uri.path(), "Replaying recorded response for duplicate request");
                return Ok(replay(record));
            }
            Err(e) => warn!(error = %e, "Ignoring undecodable duplicate-suppression entry"),
        },
        Ok(None) => {}
        Err(e) => warn!(error = %e, "Duplicate-suppression lookup failed; passing request through"),
    }

    let request = Request::from_parts(parts, Body::from(body_bytes));
    let response = next.run(request).await;

    // Only successful responses are worth replaying.
    if !response.status().is_success() {
        return Ok(response);
    }

    let (res_parts, res_body) = response.into_parts();
    let res_bytes = axum::body::to_bytes(res_body, usize::MAX)
        .await
        .map_err(|e| AppError::internal(format!("Failed to buffer response body: {e}")))?;

    let record = CachedResponse {
        status: res_parts.status.as_u16(),
        content_type: res_parts
            .headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from),
        body: String::from_utf8_lossy(&res_bytes).into_owned(),
    };

    match serde_json::to_string(&record) {
        Ok(serialized) => {
            if let Err(e) = dedup.cache.set(&key, &serialized, dedup.ttl).await {
                warn!(error = %e, "Failed to record response for duplicate suppression");
            }
        }
        Err(e) => warn!(error = %e, "Failed to serialize response for duplicate suppression"),
    }

    Ok(Response::from_parts(res_parts, Body::from(res_bytes)))
}

/// Builds a response from a recorded entry.
fn replay(record: CachedResponse) -> Response {
    let status = StatusCode::from_u16(record.status).unwrap_or(StatusCode::OK);
    let mut builder = Response::builder().status(status);
    if let Some(content_type) = record.content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }

    builder
        .body(Body::from(record.body))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use axum::Router;
    use axum::http::{Request, StatusCode};
    use axum::middleware::from_fn_with_state;
    use axum::routing::get;
    use tower::ServiceExt;

    use bouquet_cache::memory::MemoryCacheProvider;
    use bouquet_cache::provider::CacheManager;
    use bouquet_core::config::cache::MemoryCacheConfig;

    use super::*;

    fn make_dedup(ttl: Duration) -> RequestDedup {
        let provider = MemoryCacheProvider::new(&MemoryCacheConfig { max_capacity: 100 }, 60);
        RequestDedup::new(
            Arc::new(CacheManager::from_provider(Arc::new(provider))),
            ttl,
        )
    }

    fn counting_router(counter: Arc<AtomicUsize>, status: StatusCode, dedup: RequestDedup) -> Router {
        Router::new()
            .route(
                "/items",
                get(move || {
                    let counter = Arc::clone(&counter);
                    async move {
                        let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
                        (status, format!("{{\"execution\":{n}}}"))
                    }
                }),
            )
            .layer(from_fn_with_state(dedup, suppress_duplicates))
    }

    async fn send(router: &Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .clone()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_duplicate_request_is_replayed() {
        let counter = Arc::new(AtomicUsize::new(0));
        let router = counting_router(
            Arc::clone(&counter),
            StatusCode::OK,
            make_dedup(Duration::from_secs(10)),
        );

        let (status1, body1) = send(&router, "/items").await;
        let (status2, body2) = send(&router, "/items").await;

        assert_eq!(status1, StatusCode::OK);
        assert_eq!(status2, StatusCode::OK);
        assert_eq!(body1, body2);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_error_responses_are_not_recorded() {
        let counter = Arc::new(AtomicUsize::new(0));
        let router = counting_router(
            Arc::clone(&counter),
            StatusCode::INTERNAL_SERVER_ERROR,
            make_dedup(Duration::from_secs(10)),
        );

        send(&router, "/items").await;
        send(&router, "/items").await;

        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_different_urls_execute_separately() {
        let counter = Arc::new(AtomicUsize::new(0));
        let router = counting_router(
            Arc::clone(&counter),
            StatusCode::OK,
            make_dedup(Duration::from_secs(10)),
        );

        send(&router, "/items?page=1").await;
        send(&router, "/items?page=2").await;
        send(&router, "/items?page=1").await;

        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_window_expiry_re_executes() {
        let counter = Arc::new(AtomicUsize::new(0));
        let router = counting_router(
            Arc::clone(&counter),
            StatusCode::OK,
            make_dedup(Duration::from_millis(50)),
        );

        send(&router, "/items").await;
        tokio::time::sleep(Duration::from_millis(150)).await;
        send(&router, "/items").await;

        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_fingerprint_depends_on_url_and_body() {
        let uri: Uri = "/items?page=1".parse().unwrap();
        let other: Uri = "/items?page=2".parse().unwrap();

        assert_eq!(fingerprint(&uri, b"{}"), fingerprint(&uri, b"{}"));
        assert_ne!(fingerprint(&uri, b"{}"), fingerprint(&other, b"{}"));
        assert_ne!(fingerprint(&uri, b"{}"), fingerprint(&uri, b"{\"a\":1}"));
    }
}
