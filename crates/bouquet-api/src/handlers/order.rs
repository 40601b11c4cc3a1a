//! Order handlers — CRUD over rendered order views.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use bouquet_core::error::AppError;
use bouquet_core::types::pagination::PageResponse;
use bouquet_entity::order::{CreateOrder, UpdateOrder};

use crate::dto::request::{CreateOrderRequest, UpdateOrderRequest};
use crate::dto::response::OrderResource;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/v1/orders
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<PageResponse<OrderResource>>> {
    let page = state
        .order_service
        .list(&params.into_page_request())
        .await?;
    Ok(Json(page.map(OrderResource::from)))
}

/// GET /api/v1/orders/{id}
pub async fn show(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<OrderResource>> {
    let view = state.order_service.get(id).await?;
    Ok(Json(view.into()))
}

/// POST /api/v1/orders
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<CreateOrderRequest>,
) -> ApiResult<(StatusCode, Json<OrderResource>)> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let data = CreateOrder {
        user_id: req.user_id,
        commodity_id: req.commodity_id,
        count: req.count,
    };
    let view = state.order_service.create(&data).await?;

    Ok((StatusCode::CREATED, Json(view.into())))
}

/// PUT /api/v1/orders/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateOrderRequest>,
) -> ApiResult<Json<OrderResource>> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let data = UpdateOrder { count: req.count };
    let view = state.order_service.update(id, &data).await?;

    Ok(Json(view.into()))
}

/// DELETE /api/v1/orders/{id}
pub async fn destroy(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.order_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
