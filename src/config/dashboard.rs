//! Dashboard consumer configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Settings for the dashboard consumers that call back into the API.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Base URL of the dashboard API (no trailing slash required)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Telemetry polling interval in seconds
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,

    /// Per-request timeout for consumer HTTP calls in seconds
    #[serde(default = "default_client_timeout")]
    pub client_timeout_secs: u64,
}

impl DashboardConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn client_timeout(&self) -> Duration {
        Duration::from_secs(self.client_timeout_secs)
    }

    /// Validate dashboard configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://")
        {
            return Err(ValidationError::InvalidApiBaseUrl);
        }
        if self.poll_interval_secs == 0 {
            return Err(ValidationError::InvalidPollInterval);
        }
        if self.client_timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            poll_interval_secs: default_poll_interval(),
            client_timeout_secs: default_client_timeout(),
        }
    }
}

fn default_api_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_poll_interval() -> u64 {
    30
}

fn default_client_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_config_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.poll_interval(), Duration::from_secs(30));
        assert_eq!(config.client_timeout(), Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_non_http_base_url() {
        let config = DashboardConfig {
            api_base_url: "ftp://example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidApiBaseUrl));
    }

    #[test]
    fn test_validation_rejects_zero_poll_interval() {
        let config = DashboardConfig {
            poll_interval_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidPollInterval));
    }

    #[test]
    fn test_deserializes_partial_settings() {
        let json = r#"{ "poll_interval_secs": 5 }"#;
        let config: DashboardConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.poll_interval_secs, 5);
        assert_eq!(config.api_base_url, "http://127.0.0.1:8080");
    }
}
