//! HTTP routes for the MCP tool endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{invoke_tool, list_tools, McpAppState};

pub fn mcp_routes(state: McpAppState) -> Router {
    Router::new()
        // POST /api/mcp
        .route("/api/mcp", post(invoke_tool))
        // GET /api/mcp/tools
        .route("/api/mcp/tools", get(list_tools))
        .with_state(state)
}
