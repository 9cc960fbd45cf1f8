//! reqwest implementation of the DashboardApi port.
//!
//! Talks to `/api/telemetry` and `/api/mcp` on a configured base URL.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

use crate::config::DashboardConfig;
use crate::domain::telemetry::TelemetrySnapshot;
use crate::domain::tools::ToolInvocationResult;
use crate::ports::{DashboardApi, DashboardClientError};

/// Shown when the telemetry endpoint answers with a non-success status.
pub const TELEMETRY_FAILED: &str = "Failed to fetch telemetry data";

/// Shown when a tool call fails without an `error` field in the body.
pub const TOOL_CALL_FAILED: &str = "Failed to call MCP tool";

#[derive(Serialize)]
struct InvokeBody<'a> {
    tool: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<&'a str>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// DashboardApi over HTTP.
#[derive(Clone)]
pub struct HttpDashboardApi {
    base_url: String,
    client: Client,
}

impl HttpDashboardApi {
    /// Builds a client for `config.api_base_url` with the configured timeout.
    pub fn new(config: &DashboardConfig) -> Result<Self, DashboardClientError> {
        let client = Client::builder()
            .timeout(config.client_timeout())
            .build()
            .map_err(|e| DashboardClientError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        response: Response,
    ) -> Result<T, DashboardClientError> {
        response
            .json::<T>()
            .await
            .map_err(|e| DashboardClientError::Decode(e.to_string()))
    }
}

fn transport_error(e: reqwest::Error) -> DashboardClientError {
    if e.is_timeout() {
        DashboardClientError::Transport("Request timed out".to_string())
    } else if e.is_connect() {
        DashboardClientError::Transport(format!("Connection failed: {}", e))
    } else {
        DashboardClientError::Transport(e.to_string())
    }
}

#[async_trait]
impl DashboardApi for HttpDashboardApi {
    async fn fetch_telemetry(&self) -> Result<TelemetrySnapshot, DashboardClientError> {
        let response = self
            .client
            .get(self.url("/api/telemetry"))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(DashboardClientError::api(status.as_u16(), TELEMETRY_FAILED));
        }

        Self::decode(response).await
    }

    async fn invoke_tool(
        &self,
        tool: &str,
        input: Option<&str>,
    ) -> Result<ToolInvocationResult, DashboardClientError> {
        let input = input.filter(|s| !s.is_empty());
        let response = self
            .client
            .post(self.url("/api/mcp"))
            .json(&InvokeBody { tool, input })
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status.is_success() {
            return Self::decode(response).await;
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| TOOL_CALL_FAILED.to_string());
        Err(DashboardClientError::api(status.as_u16(), message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base: &str) -> DashboardConfig {
        DashboardConfig {
            api_base_url: base.to_string(),
            ..DashboardConfig::default()
        }
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let api = HttpDashboardApi::new(&config("http://localhost:9000/")).unwrap();
        assert_eq!(api.url("/api/mcp"), "http://localhost:9000/api/mcp");
    }

    #[test]
    fn empty_input_is_omitted_from_body() {
        let body = serde_json::to_value(InvokeBody {
            tool: "roll-dice",
            input: None,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "tool": "roll-dice" }));
    }

    #[tokio::test]
    async fn unreachable_server_is_transport_error() {
        let api = HttpDashboardApi::new(&config("http://127.0.0.1:1")).unwrap();
        let err = api.fetch_telemetry().await.unwrap_err();
        assert!(matches!(err, DashboardClientError::Transport(_)));
    }
}
