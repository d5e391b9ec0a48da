//! Service Configuration
//!
//! All configuration values are loaded from environment variables.

use std::env;
use std::net::SocketAddr;

/// Configuration errors surfaced at startup
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Invalid(String),
}

/// Service configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL connection string (from DATABASE_URL env var)
    pub database_url: String,

    /// Listen address (from BIND_ADDR env var)
    pub bind_addr: String,

    /// Maximum connections in the database pool (from DB_MAX_CONNECTIONS env var)
    pub db_max_connections: u32,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost/gym".to_string()),

            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),

            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_url.is_empty() {
            return Err(ConfigError::Invalid(
                "DATABASE_URL must not be empty".to_string(),
            ));
        }

        if self.bind_addr.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::Invalid(format!(
                "BIND_ADDR is not a valid socket address: {}",
                self.bind_addr
            )));
        }

        if self.db_max_connections == 0 {
            return Err(ConfigError::Invalid(
                "DB_MAX_CONNECTIONS must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> AppConfig {
        AppConfig {
            database_url: "postgres://localhost/gym".to_string(),
            bind_addr: "0.0.0.0:8080".to_string(),
            db_max_connections: 5,
        }
    }

    #[test]
    fn test_config_validation() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_config_validation_bad_bind_addr() {
        let config = AppConfig {
            bind_addr: "not-an-address".to_string(),
            ..valid_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_zero_pool() {
        let config = AppConfig {
            db_max_connections: 0,
            ..valid_config()
        };
        assert!(config.validate().is_err());
    }
}
