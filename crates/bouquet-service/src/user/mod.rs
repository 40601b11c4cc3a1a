//! User resource operations.

pub mod service;

pub use service::UserService;
