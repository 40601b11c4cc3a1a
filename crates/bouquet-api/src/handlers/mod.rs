//! Route handlers organized by domain.

pub mod auth;
pub mod commodity;
pub mod health;
pub mod order;
pub mod user;
