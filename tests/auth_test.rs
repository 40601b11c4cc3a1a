//! Integration tests for the authentication flow.

mod helpers;

use http::StatusCode;

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_register_returns_token() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/v1/auth/register",
            Some(serde_json::json!({
                "name": "Alice",
                "email": "alice@example.com",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.body.get("token").is_some());
    assert!(response.body.get("expires_at").is_some());
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_register_existing_email_reuses_row() {
    let app = helpers::TestApp::new().await;
    app.register("Alice", "alice@example.com", "password123")
        .await;
    let user_id = app.user_id_by_email("alice@example.com").await;

    // Registering again with the same email never creates a duplicate
    // row: the existing user is updated in place and a token issued.
    let response = app
        .request(
            "POST",
            "/api/v1/auth/register",
            Some(serde_json::json!({
                "name": "Other Alice",
                "email": "alice@example.com",
                "password": "password456",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.body.get("token").is_some());
    assert_eq!(app.user_id_by_email("alice@example.com").await, user_id);

    // The stored password is untouched by the re-registration.
    let response = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(serde_json::json!({
                "email": "alice@example.com",
                "password": "password123",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_register_resurrects_soft_deleted_user() {
    let app = helpers::TestApp::new().await;
    let token = app
        .register("Alice", "alice@example.com", "password123")
        .await;
    let user_id = app.user_id_by_email("alice@example.com").await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/v1/users/{user_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    // Re-registering the same email revives the old row instead of
    // creating a new one. The original password still works.
    let response = app
        .request(
            "POST",
            "/api/v1/auth/register",
            Some(serde_json::json!({
                "name": "Alice Again",
                "email": "alice@example.com",
                "password": "ignored-password",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let revived_id = app.user_id_by_email("alice@example.com").await;
    assert_eq!(revived_id, user_id);

    let response = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(serde_json::json!({
                "email": "alice@example.com",
                "password": "password123",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_login_invalid_password() {
    let app = helpers::TestApp::new().await;
    app.register("Bob", "bob@example.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(serde_json::json!({
                "email": "bob@example.com",
                "password": "wrongpassword",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_login_nonexistent_user() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(serde_json::json!({
                "email": "nobody@example.com",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_logout_revokes_token() {
    let app = helpers::TestApp::new().await;
    let token = app
        .register("Carol", "carol@example.com", "password123")
        .await;

    let response = app
        .request("POST", "/api/v1/auth/logout", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // Token should now be invalid
    let response = app.request("GET", "/api/v1/users", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_refresh_rotates_token() {
    let app = helpers::TestApp::new().await;
    let token = app
        .register("Dave", "dave@example.com", "password123")
        .await;

    let response = app
        .request("POST", "/api/v1/auth/refresh", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let new_token = response
        .body
        .get("token")
        .and_then(|v| v.as_str())
        .expect("No token in refresh response")
        .to_string();
    assert_ne!(new_token, token);

    // The new token works; the old one was revoked.
    let response = app
        .request("GET", "/api/v1/users", None, Some(&new_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", "/api/v1/users", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_protected_route_without_token() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/v1/users", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
