//! Session token repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use bouquet_core::error::{AppError, ErrorKind};
use bouquet_core::result::AppResult;
use bouquet_entity::token::SessionToken;

/// Repository for session token persistence.
#[derive(Debug, Clone)]
pub struct TokenRepository {
    pool: PgPool,
}

impl TokenRepository {
    /// Create a new token repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a newly issued token.
    pub async fn create(
        &self,
        user_id: Uuid,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> AppResult<SessionToken> {
        sqlx::query_as::<_, SessionToken>(
            "INSERT INTO session_tokens (user_id, token_hash, expires_at) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(user_id)
        .bind(token_hash)
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to store token", e))
    }

    /// Look up a token row by its hash.
    pub async fn find_by_hash(&self, token_hash: &str) -> AppResult<Option<SessionToken>> {
        sqlx::query_as::<_, SessionToken>("SELECT * FROM session_tokens WHERE token_hash = $1")
            .bind(token_hash)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find token", e))
    }

    /// Mark a token as revoked. Revoking twice is harmless.
    pub async fn revoke(&self, id: Uuid) -> AppResult<()> {
        sqlx::query(
            "UPDATE session_tokens SET revoked_at = NOW() WHERE id = $1 AND revoked_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to revoke token", e))?;
        Ok(())
    }

    /// Delete token rows whose expiry has passed. Returns the count removed.
    pub async fn purge_expired(&self) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM session_tokens WHERE expires_at <= NOW()")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to purge expired tokens", e)
            })?;

        Ok(result.rows_affected())
    }
}
