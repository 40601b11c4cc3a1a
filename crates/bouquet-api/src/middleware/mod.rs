//! Axum middleware stack.

pub mod cors;
pub mod dedup;
pub mod logging;
