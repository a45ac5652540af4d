//! Database configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Database connection pool configuration.
///
/// `url`, `username` and `password` are mandatory; the server refuses to
/// start when any of them is blank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL (credentials may be omitted from it).
    #[serde(default)]
    pub url: String,
    /// Login role.
    #[serde(default)]
    pub username: String,
    /// Login password.
    #[serde(default)]
    pub password: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Idle connection timeout in seconds.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_seconds: u64,
}

impl DatabaseConfig {
    /// Fail with a configuration error naming the first missing parameter.
    pub fn validate(&self) -> Result<(), AppError> {
        let required = [
            ("database.url", &self.url),
            ("database.username", &self.username),
            ("database.password", &self.password),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(AppError::configuration(format!(
                    "Missing required connection parameter '{key}'"
                )));
            }
        }
        if self.min_connections > self.max_connections {
            return Err(AppError::configuration(format!(
                "database.min_connections ({}) exceeds database.max_connections ({})",
                self.min_connections, self.max_connections
            )));
        }
        Ok(())
    }
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_idle_timeout() -> u64 {
    300
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn config() -> DatabaseConfig {
        DatabaseConfig {
            url: "postgres://localhost:5432/car_shop".to_string(),
            username: "shop".to_string(),
            password: "secret".to_string(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_seconds: default_connect_timeout(),
            idle_timeout_seconds: default_idle_timeout(),
        }
    }

    #[test]
    fn test_complete_config_is_valid() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_missing_password_is_fatal() {
        let mut cfg = config();
        cfg.password = String::new();
        let err = cfg.validate().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
        assert!(err.message.contains("database.password"));
    }

    #[test]
    fn test_blank_username_is_fatal() {
        let mut cfg = config();
        cfg.username = "   ".to_string();
        let err = cfg.validate().unwrap_err();
        assert!(err.message.contains("database.username"));
    }

    #[test]
    fn test_min_above_max_rejected() {
        let mut cfg = config();
        cfg.min_connections = 20;
        assert!(cfg.validate().is_err());
    }
}
