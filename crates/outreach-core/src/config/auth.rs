//! `[auth]` section.

use serde::{Deserialize, Serialize};

/// Placeholder secret shipped in `default.toml`; refused outside development.
pub const PLACEHOLDER_JWT_SECRET: &str = "change-me-in-production";

/// Access token signing (HS256) and lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_access_ttl_minutes: u64,
}

impl AuthConfig {
    /// Whether the secret is still the shipped placeholder or empty.
    pub fn uses_placeholder_secret(&self) -> bool {
        self.jwt_secret.is_empty() || self.jwt_secret == PLACEHOLDER_JWT_SECRET
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: PLACEHOLDER_JWT_SECRET.into(),
            jwt_access_ttl_minutes: 60,
        }
    }
}
