//! MCP HTTP adapter module.
//!
//! `POST /api/mcp` runs a simulated tool; `GET /api/mcp/tools` lists them.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::McpAppState;
pub use routes::mcp_routes;
