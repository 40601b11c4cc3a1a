//! Commodity entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A commodity available for ordering.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Commodity {
    /// Unique commodity identifier.
    pub id: Uuid,
    /// Commodity name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Price in minor currency units.
    pub price: i64,
    /// When the commodity was created.
    pub created_at: DateTime<Utc>,
    /// When the commodity was last updated.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker.
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Data required to create a new commodity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommodity {
    /// Commodity name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Price in minor currency units.
    pub price: i64,
}

/// Partial update for an existing commodity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCommodity {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New price.
    pub price: Option<i64>,
}
