//! Cache backends for Bouquet.
//!
//! Two providers implement the [`bouquet_core::traits::CacheProvider`]
//! contract: an in-process store built on `moka` and a Redis-backed store.
//! [`provider::CacheManager`] picks one at startup based on configuration
//! and is what the rest of the application holds on to.

pub mod keys;
pub mod provider;

#[cfg(feature = "memory")]
pub mod memory;

#[cfg(feature = "redis-backend")]
pub mod redis;

pub use provider::CacheManager;
