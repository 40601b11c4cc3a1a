//! Session token entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A stored session token row.
///
/// Only the SHA-256 hash of the token is persisted; the plaintext is
/// handed to the client exactly once at issue time. Lifecycle:
/// issued → valid → expired or revoked.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SessionToken {
    /// Unique token identifier.
    pub id: Uuid,
    /// The owning user.
    pub user_id: Uuid,
    /// SHA-256 hash of the bearer token, hex-encoded.
    #[serde(skip_serializing)]
    pub token_hash: String,
    /// When the token was issued.
    pub issued_at: DateTime<Utc>,
    /// When the token expires.
    pub expires_at: DateTime<Utc>,
    /// When the token was revoked, if it was.
    pub revoked_at: Option<DateTime<Utc>>,
}

impl SessionToken {
    /// Check whether the token has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }

    /// Check whether the token has been explicitly revoked.
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }

    /// Check whether the token is currently usable.
    pub fn is_valid(&self) -> bool {
        !self.is_revoked() && !self.is_expired()
    }
}

/// A freshly issued token, carrying the plaintext exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    /// The opaque bearer token to hand to the client.
    pub token: String,
    /// When the token expires.
    pub expires_at: DateTime<Utc>,
}
