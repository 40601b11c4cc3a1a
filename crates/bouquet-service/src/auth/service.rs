//! Registration, login, logout and token refresh flows.

use std::sync::Arc;

use tracing::{error, info};

use bouquet_auth::password::PasswordHasher;
use bouquet_auth::token::TokenService;
use bouquet_core::error::AppError;
use bouquet_core::result::AppResult;
use bouquet_database::repositories::user::UserRepository;
use bouquet_entity::token::IssuedToken;
use bouquet_entity::user::{CreateUser, User};

use crate::context::RequestContext;

/// Handles the authentication lifecycle.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// User persistence.
    users: Arc<UserRepository>,
    /// Token issuance and validation.
    tokens: Arc<TokenService>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        users: Arc<UserRepository>,
        tokens: Arc<TokenService>,
        hasher: Arc<PasswordHasher>,
    ) -> Self {
        Self {
            users,
            tokens,
            hasher,
        }
    }

    /// Registers a new user and returns a fresh token.
    ///
    /// If any user already holds this email, active or soft-deleted,
    /// that row is reused instead of creating a duplicate: it is
    /// un-deleted if needed and its name and email are updated from the
    /// request. The row id and stored password survive; the submitted
    /// password is only hashed for brand-new rows.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> AppResult<(User, IssuedToken)> {
        let user = match self.users.find_by_email_any(email).await? {
            Some(existing) => {
                let was_deleted = existing.is_deleted();
                let restored = self.users.restore(existing.id, name, email).await?;
                if was_deleted {
                    info!(user_id = %restored.id, "Restored soft-deleted user on re-registration");
                } else {
                    info!(user_id = %restored.id, "Re-registered active user");
                }
                restored
            }
            None => {
                let data = CreateUser {
                    name: name.to_string(),
                    email: email.to_string(),
                    password_hash: self.hasher.hash_password(password)?,
                };
                match self.users.create(&data).await {
                    Ok(created) => {
                        info!(user_id = %created.id, "Registered new user");
                        created
                    }
                    Err(e) => {
                        error!(error = %e, "User creation failed");
                        return Err(AppError::bad_request("Could not create user"));
                    }
                }
            }
        };

        let token = self.tokens.issue(user.id).await?;
        Ok((user, token))
    }

    /// Authenticates by email and password and returns a fresh token.
    ///
    /// Soft-deleted users cannot log in; their email resolves to no
    /// live row and fails the same way a wrong password does.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<(User, IssuedToken)> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

        let valid = self.hasher.verify_password(password, &user.password_hash)?;
        if !valid {
            return Err(AppError::unauthorized("Invalid email or password"));
        }

        let token = self.tokens.issue(user.id).await?;
        info!(user_id = %user.id, "Login successful");

        Ok((user, token))
    }

    /// Revokes the token the current request authenticated with.
    pub async fn logout(&self, ctx: &RequestContext) -> AppResult<()> {
        self.tokens.revoke(ctx.token_id).await?;
        info!(user_id = %ctx.user_id, "Logout completed");
        Ok(())
    }

    /// Exchanges the current token for a fresh one.
    pub async fn refresh(&self, ctx: &RequestContext) -> AppResult<IssuedToken> {
        let issued = self.tokens.refresh(ctx.user_id, ctx.token_id).await?;
        info!(user_id = %ctx.user_id, "Token refreshed");
        Ok(issued)
    }
}
