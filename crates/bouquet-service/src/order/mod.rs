//! Order resource operations.

pub mod service;

pub use service::OrderService;
