//! Response DTOs — the stable payload contract of the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bouquet_entity::commodity::Commodity;
use bouquet_entity::order::OrderView;
use bouquet_entity::token::IssuedToken;
use bouquet_entity::user::User;

/// Token issuance response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// The opaque bearer token.
    pub token: String,
    /// When the token expires.
    pub expires_at: DateTime<Utc>,
}

impl From<IssuedToken> for TokenResponse {
    fn from(issued: IssuedToken) -> Self {
        Self {
            token: issued.token,
            expires_at: issued.expires_at,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// User payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResource {
    /// User ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

impl From<User> for UserResource {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Commodity payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommodityResource {
    /// Commodity ID.
    pub id: Uuid,
    /// Name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Price in minor currency units.
    pub price: i64,
}

impl From<Commodity> for CommodityResource {
    fn from(commodity: Commodity) -> Self {
        Self {
            id: commodity.id,
            name: commodity.name,
            description: commodity.description,
            price: commodity.price,
        }
    }
}

/// Order payload, rendered against the current commodity and user rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResource {
    /// Order ID.
    pub id: Uuid,
    /// Name of the ordered commodity.
    pub commodity: String,
    /// Current unit price of the commodity.
    pub price: i64,
    /// Total cost, `price * count`, computed at read time.
    pub cost: i64,
    /// Quantity.
    pub count: i64,
    /// Name of the ordering user.
    pub user: String,
}

impl From<OrderView> for OrderResource {
    fn from(view: OrderView) -> Self {
        let cost = view.cost();
        Self {
            id: view.id,
            commodity: view.commodity_name,
            price: view.price,
            cost,
            count: view.count,
            user: view.user_name,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: `"ok"` or `"degraded"`.
    pub status: String,
    /// Whether the database responded.
    pub database: bool,
    /// Whether the cache responded.
    pub cache: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_resource_computes_cost() {
        let view = OrderView {
            id: Uuid::new_v4(),
            commodity_name: "Tulip bundle".to_string(),
            price: 1250,
            count: 3,
            user_name: "Alice".to_string(),
        };
        let resource = OrderResource::from(view);
        assert_eq!(resource.cost, 3750);
    }

    #[test]
    fn test_user_resource_omits_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "$argon2id$...".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        };
        let json = serde_json::to_value(UserResource::from(user)).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["name"], "Alice");
    }
}
