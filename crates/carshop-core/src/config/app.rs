//! HTTP listener and CORS settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Methods the REST API answers; also the default CORS allow-list.
const API_METHODS: [&str; 5] = ["GET", "POST", "PUT", "DELETE", "OPTIONS"];

/// Wildcard entry in CORS lists.
const ANY: &str = "*";

/// Where and how the REST API listens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound on handling one request.
    pub request_timeout_seconds: u64,
    /// How long in-flight requests may drain after a shutdown signal.
    pub shutdown_grace_seconds: u64,
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// `host:port` for the TCP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_seconds)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            request_timeout_seconds: 30,
            shutdown_grace_seconds: 30,
            cors: CorsConfig::default(),
        }
    }
}

/// Cross-origin policy applied to every route. `"*"` in a list allows
/// anything for that list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    /// Preflight cache lifetime.
    pub max_age_seconds: u64,
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == ANY)
    }

    pub fn allows_any_header(&self) -> bool {
        self.allowed_headers.iter().any(|h| h == ANY)
    }

    pub fn max_age(&self) -> Duration {
        Duration::from_secs(self.max_age_seconds)
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![ANY.to_string()],
            allowed_methods: API_METHODS.iter().map(|m| m.to_string()).collect(),
            allowed_headers: vec![ANY.to_string()],
            max_age_seconds: 3600,
        }
    }
}
