//! `[server]` section.

use serde::{Deserialize, Serialize};

/// Listener settings. Missing keys keep their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound for a single request, including the database work.
    pub request_timeout_seconds: u64,
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// `host:port` for the TCP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            request_timeout_seconds: 30,
            cors: CorsConfig::default(),
        }
    }
}

/// `[server.cors]`. A `"*"` entry in origins or headers allows any value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    /// How long browsers may cache a preflight answer.
    pub max_age_seconds: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        let owned = |values: &[&str]| values.iter().map(|v| v.to_string()).collect();
        Self {
            allowed_origins: owned(&["*"]),
            // Reads and the mark-paid post are all the API serves.
            allowed_methods: owned(&["GET", "POST", "OPTIONS"]),
            allowed_headers: owned(&["authorization", "content-type"]),
            max_age_seconds: 3600,
        }
    }
}
