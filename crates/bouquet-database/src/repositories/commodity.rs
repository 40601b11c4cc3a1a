//! Commodity repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use bouquet_core::error::{AppError, ErrorKind};
use bouquet_core::result::AppResult;
use bouquet_core::types::pagination::{PageRequest, PageResponse};
use bouquet_entity::commodity::{Commodity, CreateCommodity, UpdateCommodity};

/// Repository for commodity CRUD operations.
#[derive(Debug, Clone)]
pub struct CommodityRepository {
    pool: PgPool,
}

impl CommodityRepository {
    /// Create a new commodity repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a live commodity by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Commodity>> {
        sqlx::query_as::<_, Commodity>(
            "SELECT * FROM commodities WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find commodity", e))
    }

    /// Check whether a commodity row exists at all, soft-deleted or not.
    pub async fn exists_any(&self, id: Uuid) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM commodities WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check commodity", e)
            })
    }

    /// List live commodities with pagination.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Commodity>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM commodities WHERE deleted_at IS NULL")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count commodities", e)
                })?;

        let commodities = sqlx::query_as::<_, Commodity>(
            "SELECT * FROM commodities WHERE deleted_at IS NULL \
             ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list commodities", e))?;

        Ok(PageResponse::new(
            commodities,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a new commodity.
    pub async fn create(&self, data: &CreateCommodity) -> AppResult<Commodity> {
        sqlx::query_as::<_, Commodity>(
            "INSERT INTO commodities (name, description, price) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.price)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create commodity", e))
    }

    /// Update a live commodity's fields.
    pub async fn update(&self, id: Uuid, data: &UpdateCommodity) -> AppResult<Commodity> {
        sqlx::query_as::<_, Commodity>(
            "UPDATE commodities SET name = COALESCE($2, name), \
                                    description = COALESCE($3, description), \
                                    price = COALESCE($4, price), \
                                    updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.price)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update commodity", e))?
        .ok_or_else(|| AppError::not_found(format!("Commodity {id} not found")))
    }

    /// Soft-delete a live commodity. Returns the number of rows marked.
    pub async fn soft_delete(&self, id: Uuid) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE commodities SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete commodity", e))?;

        Ok(result.rows_affected())
    }
}
