//! Auth handlers — register, login, logout, refresh.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use bouquet_core::error::AppError;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{MessageResponse, TokenResponse};
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<TokenResponse>)> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let (_user, issued) = state
        .auth_service
        .register(&req.name, &req.email, &req.password)
        .await?;

    Ok((StatusCode::CREATED, Json(issued.into())))
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let (_user, issued) = state.auth_service.login(&req.email, &req.password).await?;

    Ok(Json(issued.into()))
}

/// POST /api/v1/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<MessageResponse>> {
    state.auth_service.logout(auth.context()).await?;
    Ok(Json(MessageResponse::new("Logged out successfully")))
}

/// POST /api/v1/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<TokenResponse>> {
    let issued = state.auth_service.refresh(auth.context()).await?;
    Ok(Json(issued.into()))
}
