//! # bouquet-entity
//!
//! Domain entity models for Bouquet: users, commodities, orders, and
//! session tokens. All rows carry timestamps and a soft-delete marker;
//! a row with `deleted_at` set is excluded from default queries but is
//! never physically removed by the application.

pub mod commodity;
pub mod order;
pub mod token;
pub mod user;

pub use commodity::Commodity;
pub use order::{Order, OrderView};
pub use token::SessionToken;
pub use user::User;
