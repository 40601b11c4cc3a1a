//! Bearer token lifecycle service.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::info;
use uuid::Uuid;

use bouquet_core::config::AuthConfig;
use bouquet_core::error::AppError;
use bouquet_core::result::AppResult;
use bouquet_database::repositories::token::TokenRepository;
use bouquet_entity::token::{IssuedToken, SessionToken};

use super::material::{generate_token, hash_token};

/// Issues, validates, refreshes and revokes bearer tokens.
#[derive(Debug, Clone)]
pub struct TokenService {
    /// Token persistence.
    tokens: Arc<TokenRepository>,
    /// Auth configuration.
    config: AuthConfig,
}

impl TokenService {
    /// Create a new token service.
    pub fn new(tokens: Arc<TokenRepository>, config: AuthConfig) -> Self {
        Self { tokens, config }
    }

    /// Issue a fresh token for a user.
    ///
    /// The plaintext token is returned exactly once; only its hash is stored.
    pub async fn issue(&self, user_id: Uuid) -> AppResult<IssuedToken> {
        let token = generate_token();
        let expires_at = Utc::now() + Duration::hours(self.config.token_ttl_hours as i64);

        let stored = self
            .tokens
            .create(user_id, &hash_token(&token), expires_at)
            .await?;

        info!(user_id = %user_id, token_id = %stored.id, "Issued token");
        Ok(IssuedToken { token, expires_at })
    }

    /// Validate a bearer token string and return its stored row.
    ///
    /// Unknown, revoked and expired tokens all map to `Unauthorized`.
    pub async fn validate(&self, token: &str) -> AppResult<SessionToken> {
        let stored = self
            .tokens
            .find_by_hash(&hash_token(token))
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid token"))?;

        if stored.is_revoked() {
            return Err(AppError::unauthorized("Token has been revoked"));
        }
        if stored.is_expired() {
            return Err(AppError::unauthorized("Token has expired"));
        }

        Ok(stored)
    }

    /// Revoke a token by its row ID. Revoking twice is harmless.
    pub async fn revoke(&self, token_id: Uuid) -> AppResult<()> {
        self.tokens.revoke(token_id).await?;
        info!(token_id = %token_id, "Revoked token");
        Ok(())
    }

    /// Exchange the token a request authenticated with for a fresh one.
    ///
    /// The new token is persisted before the old one is revoked, so the
    /// caller always holds at least one usable token. Revocation of the
    /// old token can be disabled via configuration.
    pub async fn refresh(&self, user_id: Uuid, current_id: Uuid) -> AppResult<IssuedToken> {
        let issued = self.issue(user_id).await?;

        if self.config.revoke_on_refresh {
            self.revoke(current_id).await?;
        }

        Ok(issued)
    }

    /// Drop expired token rows. Returns the count removed.
    pub async fn purge_expired(&self) -> AppResult<u64> {
        let purged = self.tokens.purge_expired().await?;
        if purged > 0 {
            info!(purged, "Purged expired tokens");
        }
        Ok(purged)
    }
}
