//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PORTFOLIO_DASHBOARD` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use portfolio_dashboard::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod dashboard;
mod database;
mod error;
mod server;

pub use dashboard::DashboardConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
/// Every section has defaults; only the database section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Dashboard consumer configuration (API base URL, poll interval)
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Project listing database. Absent means the in-memory catalog is used.
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PORTFOLIO_DASHBOARD` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PORTFOLIO_DASHBOARD__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `PORTFOLIO_DASHBOARD__DASHBOARD__POLL_INTERVAL_SECS=30` -> `dashboard.poll_interval_secs = 30`
    /// - `PORTFOLIO_DASHBOARD__DATABASE__URL=...` -> `database.url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PORTFOLIO_DASHBOARD")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.dashboard.validate()?;
        if let Some(database) = &self.database {
            database.validate()?;
        }
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
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "PORTFOLIO_DASHBOARD__SERVER__PORT",
        "PORTFOLIO_DASHBOARD__SERVER__ENVIRONMENT",
        "PORTFOLIO_DASHBOARD__DASHBOARD__POLL_INTERVAL_SECS",
        "PORTFOLIO_DASHBOARD__DATABASE__URL",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_no_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.dashboard.poll_interval_secs, 30);
        assert!(config.database.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_server_port_and_poll_interval() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("PORTFOLIO_DASHBOARD__SERVER__PORT", "3000");
        env::set_var("PORTFOLIO_DASHBOARD__DASHBOARD__POLL_INTERVAL_SECS", "5");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.dashboard.poll_interval_secs, 5);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("PORTFOLIO_DASHBOARD__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_database_section_is_loaded_and_validated() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("PORTFOLIO_DASHBOARD__DATABASE__URL", "mysql://localhost/portfolio");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.database.is_some());
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidDatabaseUrl)
        );
    }
}
