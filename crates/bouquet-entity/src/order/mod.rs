//! Order entity.

pub mod model;

pub use model::{CreateOrder, Order, OrderView, UpdateOrder};
