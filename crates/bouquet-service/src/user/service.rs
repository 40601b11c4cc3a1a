//! User listing, lookup and soft delete with order cascade.

use std::sync::Arc;

use tracing::{error, info};
use uuid::Uuid;

use bouquet_core::error::AppError;
use bouquet_core::result::AppResult;
use bouquet_core::types::pagination::{PageRequest, PageResponse};
use bouquet_database::repositories::order::OrderRepository;
use bouquet_database::repositories::user::UserRepository;
use bouquet_entity::user::User;

/// Handles user resource operations.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User persistence.
    users: Arc<UserRepository>,
    /// Order persistence, for the delete cascade.
    orders: Arc<OrderRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(users: Arc<UserRepository>, orders: Arc<OrderRepository>) -> Self {
        Self { users, orders }
    }

    /// Lists live users, paginated.
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<User>> {
        self.users.find_all(page).await
    }

    /// Fetches a live user by id.
    pub async fn get(&self, id: Uuid) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Soft-deletes a user, then soft-deletes their orders.
    ///
    /// Deleting an already-deleted user is a no-op. The cascade runs
    /// after the parent delete commits; a cascade failure is logged
    /// but does not fail the delete.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let affected = self.users.soft_delete(id).await?;

        if affected == 0 {
            if self.users.find_by_id_any(id).await?.is_none() {
                return Err(AppError::not_found("User not found"));
            }
            // Already soft-deleted; nothing to cascade.
            return Ok(());
        }

        info!(user_id = %id, "Soft-deleted user");

        match self.orders.soft_delete_by_user(id).await {
            Ok(cascaded) if cascaded > 0 => {
                info!(user_id = %id, cascaded, "Cascade soft-deleted orders for user");
            }
            Ok(_) => {}
            Err(e) => {
                error!(user_id = %id, error = %e, "Order cascade failed after user delete");
            }
        }

        Ok(())
    }
}
