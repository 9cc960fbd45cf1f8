//! HTTP handlers for the MCP tool endpoints.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::application::handlers::{InvokeToolError, InvokeToolHandler, ListToolsHandler};
use crate::domain::tools::ToolInvocationResult;
use crate::ports::RandomSource;

use super::super::error::ErrorResponse;
use super::dto::{InvokeToolRequest, ToolListResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// MCP API error that implements IntoResponse.
#[derive(Debug)]
pub struct McpApiError(pub InvokeToolError);

impl IntoResponse for McpApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            InvokeToolError::MissingTool => StatusCode::BAD_REQUEST,
            InvokeToolError::UnknownTool(_) | InvokeToolError::MalformedBody(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        ErrorResponse::new(self.0.to_string()).with_status(status)
    }
}

impl From<InvokeToolError> for McpApiError {
    fn from(error: InvokeToolError) -> Self {
        Self(error)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct McpAppState {
    pub random: Arc<dyn RandomSource>,
}

impl McpAppState {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    pub fn invoke_tool_handler(&self) -> InvokeToolHandler {
        InvokeToolHandler::new(self.random.clone())
    }

    pub fn list_tools_handler(&self) -> ListToolsHandler {
        ListToolsHandler::new()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/mcp
///
/// The body is read as JSON whatever the content type.
pub async fn invoke_tool(
    State(state): State<McpAppState>,
    body: Bytes,
) -> Result<Json<ToolInvocationResult>, McpApiError> {
    let request = serde_json::from_slice(&body)
        .map_err(|e| InvokeToolError::MalformedBody(e.to_string()))
        .and_then(InvokeToolRequest::from_json)
        .map_err(|e| {
            tracing::warn!(error = %e, "Malformed MCP request body");
            e
        })?;

    let result = state
        .invoke_tool_handler()
        .handle(request.into_command())
        .map_err(|e| {
            match &e {
                InvokeToolError::MissingTool => tracing::debug!("MCP request without tool"),
                other => tracing::warn!(error = %other, "MCP tool call failed"),
            }
            e
        })?;

    Ok(Json(result))
}

/// GET /api/mcp/tools
pub async fn list_tools(State(state): State<McpAppState>) -> Json<ToolListResponse> {
    Json(state.list_tools_handler().handle().into())
}
