//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using
//! the `config` and `dotenvy` crates. Values are read with the
//! `BACKOFFICE` prefix and `__` (double underscore) as the nesting
//! separator:
//!
//! - `BACKOFFICE__SERVER__PORT=8080` -> `server.port = 8080`
//! - `BACKOFFICE__DATABASE__URL=...` -> `database.url = ...`

mod database;
mod error;
mod server;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file if present (development), then reads
    /// prefixed environment variables and deserializes them into the
    /// typed sections.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("BACKOFFICE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_url(url: &str) -> AppConfig {
        AppConfig {
            server: ServerConfig::default(),
            database: DatabaseConfig {
                url: url.to_string(),
                min_connections: 1,
                max_connections: 5,
                acquire_timeout_secs: 30,
                idle_timeout_secs: 600,
                run_migrations: false,
            },
        }
    }

    #[test]
    fn validate_accepts_postgres_url() {
        let config = config_with_url("postgresql://user@localhost/backoffice");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_database_url() {
        let config = config_with_url("file:///tmp/db");
        assert!(config.validate().is_err());
    }
}
