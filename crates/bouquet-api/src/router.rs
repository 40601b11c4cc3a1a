//! Route definitions for the Bouquet HTTP API.
//!
//! All routes are organized by domain and mounted under `/api/v1`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::dedup::RequestDedup;
use crate::state::AppState;

/// Upper bound on accepted request bodies.
const MAX_REQUEST_BYTES: usize = 1024 * 1024;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let dedup = RequestDedup::new(
        Arc::clone(&state.cache),
        Duration::from_secs(state.config.server.dedup_ttl_seconds),
    );

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(commodity_routes(dedup.clone()))
        .merge(order_routes(dedup))
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(CompressionLayer::new())
        .layer(RequestBodyLimitLayer::new(MAX_REQUEST_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: register, login, logout, refresh
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/refresh", post(handlers::auth::refresh))
}

/// User listing and deletion
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handlers::user::list))
        .route("/users/{id}", get(handlers::user::show))
        .route("/users/{id}", delete(handlers::user::destroy))
}

/// Commodity CRUD; reads sit behind the duplicate-suppression layer
fn commodity_routes(dedup: RequestDedup) -> Router<AppState> {
    let reads = Router::new()
        .route("/commodities", get(handlers::commodity::list))
        .route("/commodities/{id}", get(handlers::commodity::show))
        .route_layer(axum_middleware::from_fn_with_state(
            dedup,
            middleware::dedup::suppress_duplicates,
        ));

    Router::new()
        .route("/commodities", post(handlers::commodity::create))
        .route("/commodities/{id}", put(handlers::commodity::update))
        .route("/commodities/{id}", delete(handlers::commodity::destroy))
        .merge(reads)
}

/// Order CRUD; reads sit behind the duplicate-suppression layer
fn order_routes(dedup: RequestDedup) -> Router<AppState> {
    let reads = Router::new()
        .route("/orders", get(handlers::order::list))
        .route("/orders/{id}", get(handlers::order::show))
        .route_layer(axum_middleware::from_fn_with_state(
            dedup,
            middleware::dedup::suppress_duplicates,
        ));

    Router::new()
        .route("/orders", post(handlers::order::create))
        .route("/orders/{id}", put(handlers::order::update))
        .route("/orders/{id}", delete(handlers::order::destroy))
        .merge(reads)
}

/// Liveness and dependency checks
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
