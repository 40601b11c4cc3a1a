//! # bouquet-api
//!
//! HTTP API layer for Bouquet built on Axum.
//!
//! Provides all REST endpoints, middleware (request logging, CORS,
//! duplicate-request suppression), extractors, DTOs, and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use router::build_router;
pub use state::AppState;
