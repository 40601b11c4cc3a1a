//! Cross-crate traits.

pub mod cache;
