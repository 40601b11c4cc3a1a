//! Commodity CRUD and soft delete with order cascade.

use std::sync::Arc;

use tracing::{error, info};
use uuid::Uuid;

use bouquet_core::error::AppError;
use bouquet_core::result::AppResult;
use bouquet_core::types::pagination::{PageRequest, PageResponse};
use bouquet_database::repositories::commodity::CommodityRepository;
use bouquet_database::repositories::order::OrderRepository;
use bouquet_entity::commodity::{Commodity, CreateCommodity, UpdateCommodity};

/// Handles commodity resource operations.
#[derive(Debug, Clone)]
pub struct CommodityService {
    /// Commodity persistence.
    commodities: Arc<CommodityRepository>,
    /// Order persistence, for the delete cascade.
    orders: Arc<OrderRepository>,
}

impl CommodityService {
    /// Creates a new commodity service.
    pub fn new(commodities: Arc<CommodityRepository>, orders: Arc<OrderRepository>) -> Self {
        Self {
            commodities,
            orders,
        }
    }

    /// Lists live commodities, paginated.
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Commodity>> {
        self.commodities.find_all(page).await
    }

    /// Fetches a live commodity by id.
    pub async fn get(&self, id: Uuid) -> AppResult<Commodity> {
        self.commodities
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Commodity not found"))
    }

    /// Creates a commodity.
    pub async fn create(&self, data: &CreateCommodity) -> AppResult<Commodity> {
        let commodity = self.commodities.create(data).await?;
        info!(commodity_id = %commodity.id, "Created commodity");
        Ok(commodity)
    }

    /// Applies a partial update to a live commodity.
    pub async fn update(&self, id: Uuid, data: &UpdateCommodity) -> AppResult<Commodity> {
        self.commodities.update(id, data).await
    }

    /// Soft-deletes a commodity, then soft-deletes orders referencing it.
    ///
    /// Deleting an already-deleted commodity is a no-op. The cascade runs
    /// after the parent delete commits; a cascade failure is logged but
    /// does not fail the delete.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let affected = self.commodities.soft_delete(id).await?;

        if affected == 0 {
            if !self.commodities.exists_any(id).await? {
                return Err(AppError::not_found("Commodity not found"));
            }
            // Already soft-deleted; nothing to cascade.
            return Ok(());
        }

        info!(commodity_id = %id, "Soft-deleted commodity");

        match self.orders.soft_delete_by_commodity(id).await {
            Ok(cascaded) if cascaded > 0 => {
                info!(commodity_id = %id, cascaded, "Cascade soft-deleted orders for commodity");
            }
            Ok(_) => {}
            Err(e) => {
                error!(commodity_id = %id, error = %e, "Order cascade failed after commodity delete");
            }
        }

        Ok(())
    }
}
