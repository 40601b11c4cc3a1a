//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use bouquet_auth::token::TokenService;
use bouquet_cache::provider::CacheManager;
use bouquet_core::config::AppConfig;
use bouquet_database::DatabasePool;
use bouquet_database::repositories::user::UserRepository;
use bouquet_service::auth::AuthService;
use bouquet_service::commodity::CommodityService;
use bouquet_service::order::OrderService;
use bouquet_service::user::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool wrapper.
    pub db: Arc<DatabasePool>,
    /// Cache manager (Redis or in-memory).
    pub cache: Arc<CacheManager>,
    /// Token issuance and validation.
    pub token_service: Arc<TokenService>,
    /// User repository, consulted by the auth extractor.
    pub user_repo: Arc<UserRepository>,
    /// Auth workflow service.
    pub auth_service: Arc<AuthService>,
    /// User resource service.
    pub user_service: Arc<UserService>,
    /// Commodity resource service.
    pub commodity_service: Arc<CommodityService>,
    /// Order resource service.
    pub order_service: Arc<OrderService>,
}
