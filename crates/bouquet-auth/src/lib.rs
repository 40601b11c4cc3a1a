//! Authentication primitives for Bouquet.
//!
//! Two concerns live here: Argon2id password hashing and the opaque
//! bearer token lifecycle (issue, validate, refresh, revoke). Tokens
//! are random strings handed to clients; only a SHA-256 hash is stored.

pub mod password;
pub mod token;

pub use password::PasswordHasher;
pub use token::TokenService;
