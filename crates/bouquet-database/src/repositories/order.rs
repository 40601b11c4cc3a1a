//! Order repository implementation.
//!
//! Orders are rendered through [`OrderView`], joining the current
//! commodity name/price and user name at read time. The bulk
//! `soft_delete_by_*` methods back the cascade step that runs after a
//! parent user or commodity is deleted.

use sqlx::PgPool;
use uuid::Uuid;

use bouquet_core::error::{AppError, ErrorKind};
use bouquet_core::result::AppResult;
use bouquet_core::types::pagination::{PageRequest, PageResponse};
use bouquet_entity::order::{CreateOrder, Order, OrderView, UpdateOrder};

/// Columns for the rendered order view.
const VIEW_SELECT: &str = "SELECT o.id, c.name AS commodity_name, c.price, o.count, \
                           u.name AS user_name \
                           FROM orders o \
                           JOIN commodities c ON c.id = o.commodity_id \
                           JOIN users u ON u.id = o.user_id";

/// Repository for order CRUD and cascade operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    /// Create a new order repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a live order rendered with its current commodity and user.
    pub async fn find_view_by_id(&self, id: Uuid) -> AppResult<Option<OrderView>> {
        sqlx::query_as::<_, OrderView>(&format!(
            "{VIEW_SELECT} WHERE o.id = $1 AND o.deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find order view", e))
    }

    /// List live orders as rendered views, with pagination.
    pub async fn find_all_views(&self, page: &PageRequest) -> AppResult<PageResponse<OrderView>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders WHERE deleted_at IS NULL")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count orders", e))?;

        let views = sqlx::query_as::<_, OrderView>(&format!(
            "{VIEW_SELECT} WHERE o.deleted_at IS NULL \
             ORDER BY o.created_at DESC LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list orders", e))?;

        Ok(PageResponse::new(
            views,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a new order.
    pub async fn create(&self, data: &CreateOrder) -> AppResult<Order> {
        sqlx::query_as::<_, Order>(
            "INSERT INTO orders (user_id, commodity_id, count) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.commodity_id)
        .bind(data.count)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create order", e))
    }

    /// Update a live order's fields.
    pub async fn update(&self, id: Uuid, data: &UpdateOrder) -> AppResult<Order> {
        sqlx::query_as::<_, Order>(
            "UPDATE orders SET count = COALESCE($2, count), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL RETURNING *",
        )
        .bind(id)
        .bind(data.count)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update order", e))?
        .ok_or_else(|| AppError::not_found(format!("Order {id} not found")))
    }

    /// Soft-delete a live order. Returns the number of rows marked.
    pub async fn soft_delete(&self, id: Uuid) -> AppResult<u64> {
        let result =
            sqlx::query("UPDATE orders SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL")
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to delete order", e)
                })?;

        Ok(result.rows_affected())
    }

    /// Check whether an order row exists at all, soft-deleted or not.
    pub async fn exists_any(&self, id: Uuid) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM orders WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check order", e))
    }

    /// Soft-delete all live orders referencing a commodity.
    ///
    /// Already-deleted orders are untouched, so re-running is a no-op.
    pub async fn soft_delete_by_commodity(&self, commodity_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE orders SET deleted_at = NOW() \
             WHERE commodity_id = $1 AND deleted_at IS NULL",
        )
        .bind(commodity_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to cascade commodity delete", e)
        })?;

        Ok(result.rows_affected())
    }

    /// Soft-delete all live orders referencing a user.
    pub async fn soft_delete_by_user(&self, user_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE orders SET deleted_at = NOW() \
             WHERE user_id = $1 AND deleted_at IS NULL",
        )
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to cascade user delete", e)
        })?;

        Ok(result.rows_affected())
    }
}
