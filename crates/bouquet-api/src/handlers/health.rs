//! Health check handler.

use axum::Json;
use axum::extract::State;

use bouquet_core::traits::cache::CacheProvider;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /api/v1/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = state.db.health_check().await.unwrap_or(false);
    let cache = state.cache.health_check().await.unwrap_or(false);

    let status = if database && cache { "ok" } else { "degraded" };

    Json(HealthResponse {
        status: status.to_string(),
        database,
        cache,
    })
}
