//! Bouquet Server — e-commerce REST API
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use bouquet_core::config::AppConfig;
use bouquet_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("BOUQUET_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Bouquet v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let db = bouquet_database::connection::DatabasePool::connect(&config.database).await?;

    db.migrate().await?;

    let pool = db.pool().clone();
    let db = Arc::new(db);
    let db_for_shutdown = Arc::clone(&db);

    // ── Step 2: Initialize cache ─────────────────────────────────
    tracing::info!(
        "Initializing cache (provider: {})...",
        config.cache.provider
    );
    let cache = Arc::new(bouquet_cache::provider::CacheManager::new(&config.cache).await?);
    tracing::info!("Cache initialized");

    // ── Step 3: Initialize repositories ──────────────────────────
    let user_repo = Arc::new(bouquet_database::repositories::user::UserRepository::new(
        pool.clone(),
    ));
    let commodity_repo = Arc::new(
        bouquet_database::repositories::commodity::CommodityRepository::new(pool.clone()),
    );
    let order_repo = Arc::new(bouquet_database::repositories::order::OrderRepository::new(
        pool.clone(),
    ));
    let token_repo = Arc::new(bouquet_database::repositories::token::TokenRepository::new(
        pool,
    ));

    // ── Step 4: Initialize auth system ───────────────────────────
    let password_hasher = Arc::new(bouquet_auth::password::PasswordHasher::new());
    let token_service = Arc::new(bouquet_auth::token::TokenService::new(
        Arc::clone(&token_repo),
        config.auth.clone(),
    ));

    // Opportunistic cleanup of tokens left over from earlier runs.
    if let Err(e) = token_service.purge_expired().await {
        tracing::warn!("Expired token purge failed: {e}");
    }

    // ── Step 5: Initialize services ──────────────────────────────
    let auth_service = Arc::new(bouquet_service::auth::AuthService::new(
        Arc::clone(&user_repo),
        Arc::clone(&token_service),
        password_hasher,
    ));
    let user_service = Arc::new(bouquet_service::user::UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&order_repo),
    ));
    let commodity_service = Arc::new(bouquet_service::commodity::CommodityService::new(
        Arc::clone(&commodity_repo),
        Arc::clone(&order_repo),
    ));
    let order_service = Arc::new(bouquet_service::order::OrderService::new(
        Arc::clone(&order_repo),
        Arc::clone(&commodity_repo),
        Arc::clone(&user_repo),
    ));

    // ── Step 6: Build and start HTTP server ──────────────────────
    let app_state = bouquet_api::state::AppState {
        config: Arc::new(config.clone()),
        db,
        cache,
        token_service,
        user_repo,
        auth_service,
        user_service,
        commodity_service,
        order_service,
    };

    let app = bouquet_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Bouquet server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db_for_shutdown.close().await;
    tracing::info!("Bouquet server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
