//! Authentication workflow.

pub mod service;

pub use service::AuthService;
