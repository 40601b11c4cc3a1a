//! Order CRUD with reference validation at creation time.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use bouquet_core::error::AppError;
use bouquet_core::result::AppResult;
use bouquet_core::types::pagination::{PageRequest, PageResponse};
use bouquet_database::repositories::commodity::CommodityRepository;
use bouquet_database::repositories::order::OrderRepository;
use bouquet_database::repositories::user::UserRepository;
use bouquet_entity::order::{CreateOrder, OrderView, UpdateOrder};

/// Handles order resource operations.
#[derive(Debug, Clone)]
pub struct OrderService {
    /// Order persistence.
    orders: Arc<OrderRepository>,
    /// Commodity persistence, for reference checks.
    commodities: Arc<CommodityRepository>,
    /// User persistence, for reference checks.
    users: Arc<UserRepository>,
}

impl OrderService {
    /// Creates a new order service.
    pub fn new(
        orders: Arc<OrderRepository>,
        commodities: Arc<CommodityRepository>,
        users: Arc<UserRepository>,
    ) -> Self {
        Self {
            orders,
            commodities,
            users,
        }
    }

    /// Lists live orders as rendered views, paginated.
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<OrderView>> {
        self.orders.find_all_views(page).await
    }

    /// Fetches a live order as its rendered view.
    pub async fn get(&self, id: Uuid) -> AppResult<OrderView> {
        self.orders
            .find_view_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Order not found"))
    }

    /// Creates an order after validating its references.
    ///
    /// The commodity must exist and not be soft-deleted. The user must
    /// exist but may be soft-deleted. References are checked at creation
    /// only; later deletes of either parent soft-delete the order via
    /// the cascade instead.
    pub async fn create(&self, data: &CreateOrder) -> AppResult<OrderView> {
        if self.commodities.find_by_id(data.commodity_id).await?.is_none() {
            return Err(AppError::not_found("Commodity not found"));
        }
        if self.users.find_by_id_any(data.user_id).await?.is_none() {
            return Err(AppError::not_found("User not found"));
        }

        let order = self.orders.create(data).await?;
        info!(order_id = %order.id, "Created order");

        self.get(order.id).await
    }

    /// Updates the count of a live order.
    pub async fn update(&self, id: Uuid, data: &UpdateOrder) -> AppResult<OrderView> {
        let order = self.orders.update(id, data).await?;
        self.get(order.id).await
    }

    /// Soft-deletes an order. Deleting twice is a no-op.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let affected = self.orders.soft_delete(id).await?;

        if affected == 0 {
            if !self.orders.exists_any(id).await? {
                return Err(AppError::not_found("Order not found"));
            }
            return Ok(());
        }

        info!(order_id = %id, "Soft-deleted order");
        Ok(())
    }
}
