//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod projects;
pub mod telemetry;
pub mod tools;

pub use projects::ListProjectsHandler;
pub use telemetry::GetTelemetryHandler;
pub use tools::{
    InvokeToolCommand, InvokeToolError, InvokeToolHandler, InvokeToolResult, ListToolsHandler,
};
