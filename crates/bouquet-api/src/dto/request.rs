//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name.
    #[validate(length(min = 2, max = 255, message = "Name must be at least 2 characters"))]
    pub name: String,
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create commodity request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCommodityRequest {
    /// Commodity name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Price in minor currency units.
    #[validate(range(min = 0))]
    pub price: i64,
}

/// Partial commodity update request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateCommodityRequest {
    /// New name.
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New price in minor currency units.
    #[validate(range(min = 0))]
    pub price: Option<i64>,
}

/// Create order request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateOrderRequest {
    /// The ordering user.
    pub user_id: Uuid,
    /// The commodity being ordered.
    pub commodity_id: Uuid,
    /// Quantity.
    #[validate(range(min = 1))]
    pub count: i64,
}

/// Partial order update request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateOrderRequest {
    /// New quantity.
    #[validate(range(min = 1))]
    pub count: Option<i64>,
}
