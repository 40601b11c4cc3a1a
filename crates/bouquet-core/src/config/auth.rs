//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and token lifecycle configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Session token TTL in hours.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_hours: u64,
    /// Whether a refresh revokes the token it was issued from.
    #[serde(default = "default_true")]
    pub revoke_on_refresh: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_ttl_hours: default_token_ttl(),
            revoke_on_refresh: default_true(),
        }
    }
}

fn default_token_ttl() -> u64 {
    24
}

fn default_true() -> bool {
    true
}
