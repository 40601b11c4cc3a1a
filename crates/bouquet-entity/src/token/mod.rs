//! Session token entity.

pub mod model;

pub use model::{IssuedToken, SessionToken};
