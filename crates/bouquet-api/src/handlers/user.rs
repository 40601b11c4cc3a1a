//! User handlers — list, show, delete.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use bouquet_core::types::pagination::PageResponse;

use crate::dto::response::UserResource;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/v1/users
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<PageResponse<UserResource>>> {
    let page = state
        .user_service
        .list(&params.into_page_request())
        .await?;
    Ok(Json(page.map(UserResource::from)))
}

/// GET /api/v1/users/{id}
pub async fn show(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<UserResource>> {
    let user = state.user_service.get(id).await?;
    Ok(Json(user.into()))
}

/// DELETE /api/v1/users/{id}
pub async fn destroy(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.user_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
