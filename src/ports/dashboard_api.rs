//! Dashboard API Port - What the dashboard consumers call.
//!
//! The polling consumer fetches telemetry; the on-demand consumer invokes
//! tools. The production adapter speaks HTTP to this service's own routes.
//!
//! # Errors
//!
//! `Display` on [`DashboardClientError`] is the message a consumer shows in
//! its error state, so variants carry user-facing text.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::telemetry::TelemetrySnapshot;
use crate::domain::tools::ToolInvocationResult;

/// Failure talking to the dashboard API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardClientError {
    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),

    /// The API answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The response body did not have the expected shape.
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl DashboardClientError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// HTTP status, when the API answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Client port for the dashboard endpoints.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// `GET /api/telemetry`.
    async fn fetch_telemetry(&self) -> Result<TelemetrySnapshot, DashboardClientError>;

    /// `POST /api/mcp` with `{ tool, input }`.
    async fn invoke_tool(
        &self,
        tool: &str,
        input: Option<&str>,
    ) -> Result<ToolInvocationResult, DashboardClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_server_message() {
        let err = DashboardClientError::api(500, "Unknown tool: laser");
        assert_eq!(err.to_string(), "Unknown tool: laser");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn transport_error_has_no_status() {
        let err = DashboardClientError::Transport("connection refused".to_string());
        assert_eq!(err.status(), None);
    }
}
