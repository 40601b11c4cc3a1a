//! Commodity resource operations.

pub mod service;

pub use service::CommodityService;
