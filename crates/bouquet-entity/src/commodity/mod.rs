//! Commodity entity.

pub mod model;

pub use model::{Commodity, CreateCommodity, UpdateCommodity};
