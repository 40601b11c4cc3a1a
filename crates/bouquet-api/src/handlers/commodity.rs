//! Commodity handlers — CRUD.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use bouquet_core::error::AppError;
use bouquet_core::types::pagination::PageResponse;
use bouquet_entity::commodity::{CreateCommodity, UpdateCommodity};

use crate::dto::request::{CreateCommodityRequest, UpdateCommodityRequest};
use crate::dto::response::CommodityResource;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/v1/commodities
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<PageResponse<CommodityResource>>> {
    let page = state
        .commodity_service
        .list(&params.into_page_request())
        .await?;
    Ok(Json(page.map(CommodityResource::from)))
}

/// GET /api/v1/commodities/{id}
pub async fn show(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<CommodityResource>> {
    let commodity = state.commodity_service.get(id).await?;
    Ok(Json(commodity.into()))
}

/// POST /api/v1/commodities
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<CreateCommodityRequest>,
) -> ApiResult<(StatusCode, Json<CommodityResource>)> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let data = CreateCommodity {
        name: req.name,
        description: req.description,
        price: req.price,
    };
    let commodity = state.commodity_service.create(&data).await?;

    Ok((StatusCode::CREATED, Json(commodity.into())))
}

/// PUT /api/v1/commodities/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateCommodityRequest>,
) -> ApiResult<Json<CommodityResource>> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let data = UpdateCommodity {
        name: req.name,
        description: req.description,
        price: req.price,
    };
    let commodity = state.commodity_service.update(id, &data).await?;

    Ok(Json(commodity.into()))
}

/// DELETE /api/v1/commodities/{id}
pub async fn destroy(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.commodity_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
