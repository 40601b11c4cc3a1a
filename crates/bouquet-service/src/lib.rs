//! # bouquet-service
//!
//! Business logic service layer for Bouquet. Each service orchestrates
//! repositories and authentication to implement application-level use
//! cases, including the cascade cleanup that follows a parent delete.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod commodity;
pub mod context;
pub mod order;
pub mod user;

pub use auth::AuthService;
pub use commodity::CommodityService;
pub use context::RequestContext;
pub use order::OrderService;
pub use user::UserService;
