//! Opaque bearer token lifecycle.

pub mod material;
pub mod service;

pub use service::TokenService;
