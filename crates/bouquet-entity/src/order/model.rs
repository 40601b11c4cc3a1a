//! Order entity model and its rendered view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An order of a commodity by a user.
///
/// Orders reference user and commodity by id, never by embedded copy:
/// the commodity's current name and price are resolved at render time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    /// Unique order identifier.
    pub id: Uuid,
    /// The ordering user.
    pub user_id: Uuid,
    /// The ordered commodity.
    pub commodity_id: Uuid,
    /// Ordered quantity.
    pub count: i64,
    /// When the order was created.
    pub created_at: DateTime<Utc>,
    /// When the order was last updated.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker.
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Data required to create a new order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrder {
    /// The ordering user.
    pub user_id: Uuid,
    /// The ordered commodity.
    pub commodity_id: Uuid,
    /// Ordered quantity.
    pub count: i64,
}

/// Partial update for an existing order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOrder {
    /// New quantity.
    pub count: Option<i64>,
}

/// An order joined with its commodity and user for rendering.
///
/// `price` is the commodity's *current* price; `cost` is derived from it
/// at read time rather than being stored on the order row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderView {
    /// Order identifier.
    pub id: Uuid,
    /// Current commodity name.
    pub commodity_name: String,
    /// Current commodity price in minor units.
    pub price: i64,
    /// Ordered quantity.
    pub count: i64,
    /// Name of the ordering user.
    pub user_name: String,
}

impl OrderView {
    /// Total cost: current commodity price times ordered quantity.
    pub fn cost(&self) -> i64 {
        self.price * self.count
    }
}
