//! Shared test helpers for integration tests.
//!
//! These tests need a reachable PostgreSQL instance. Point
//! `BOUQUET__DATABASE__URL` at a scratch database (or create
//! `config/test.toml`) and run `cargo test -- --ignored`.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use bouquet_core::config::AppConfig;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub pool: PgPool,
}

impl TestApp {
    /// Create a new test application with a clean database
    pub async fn new() -> Self {
        let config = AppConfig::load("test").expect("Failed to load test config");

        let db = bouquet_database::connection::DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");

        db.migrate().await.expect("Failed to run migrations");

        let pool = db.pool().clone();
        Self::clean_database(&pool).await;

        let cache = Arc::new(
            bouquet_cache::provider::CacheManager::new(&config.cache)
                .await
                .expect("Failed to init cache"),
        );

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
            pool.clone(),
        ));

        let password_hasher = Arc::new(bouquet_auth::password::PasswordHasher::new());
        let token_service = Arc::new(bouquet_auth::token::TokenService::new(
            Arc::clone(&token_repo),
            config.auth.clone(),
        ));

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

        let app_state = bouquet_api::state::AppState {
            config: Arc::new(config),
            db: Arc::new(db),
            cache,
            token_service,
            user_repo,
            auth_service,
            user_service,
            commodity_service,
            order_service,
        };

        let router = bouquet_api::router::build_router(app_state);

        Self { router, pool }
    }

    /// Clean all test data from the database
    async fn clean_database(pool: &PgPool) {
        let tables = ["session_tokens", "orders", "commodities", "users"];

        for table in &tables {
            let query = format!("DELETE FROM {}", table);
            let _ = sqlx::query(&query).execute(pool).await;
        }
    }

    /// Register a user through the API and return their bearer token
    pub async fn register(&self, name: &str, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/v1/auth/register",
                Some(serde_json::json!({
                    "name": name,
                    "email": email,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Register failed: {:?}",
            response.body
        );

        response
            .body
            .get("token")
            .and_then(|v| v.as_str())
            .expect("No token in register response")
            .to_string()
    }

    /// Look up a user's ID directly, since the token response omits it
    pub async fn user_id_by_email(&self, email: &str) -> Uuid {
        sqlx::query_scalar("SELECT id FROM users WHERE email = $1 AND deleted_at IS NULL")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .expect("User not found")
    }

    /// Create a commodity through the API and return its ID
    pub async fn create_commodity(&self, token: &str, name: &str, price: i64) -> Uuid {
        let response = self
            .request(
                "POST",
                "/api/v1/commodities",
                Some(serde_json::json!({
                    "name": name,
                    "description": format!("{name} description"),
                    "price": price,
                })),
                Some(token),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Create commodity failed: {:?}",
            response.body
        );

        response
            .body
            .get("id")
            .and_then(|v| v.as_str())
            .and_then(|s| Uuid::parse_str(s).ok())
            .expect("No id in commodity response")
    }

    /// Create an order through the API and return its ID
    pub async fn create_order(
        &self,
        token: &str,
        user_id: Uuid,
        commodity_id: Uuid,
        count: i64,
    ) -> Uuid {
        let response = self
            .request(
                "POST",
                "/api/v1/orders",
                Some(serde_json::json!({
                    "user_id": user_id,
                    "commodity_id": commodity_id,
                    "count": count,
                })),
                Some(token),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Create order failed: {:?}",
            response.body
        );

        response
            .body
            .get("id")
            .and_then(|v| v.as_str())
            .and_then(|s| Uuid::parse_str(s).ok())
            .expect("No id in order response")
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
