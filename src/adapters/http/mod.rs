//! HTTP adapters - REST API implementations.
//!
//! Each module has its own routes; `router` merges them and adds middleware.

pub mod error;
pub mod mcp;
pub mod projects;
pub mod router;
pub mod telemetry;

pub use error::ErrorResponse;
pub use mcp::{mcp_routes, McpAppState};
pub use projects::{projects_routes, ProjectsAppState};
pub use router::{api_routes, app_router, AppState};
pub use telemetry::telemetry_routes;
