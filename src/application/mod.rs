//! Application layer - Handlers and consumers.
//!
//! Handlers serve the HTTP routes. Consumers sit on the other side of the
//! API and drive the dashboard widgets.

pub mod consumers;
pub mod handlers;

pub use consumers::{PollerHandle, TelemetryPoller, TelemetryPollerConfig, ToolRunner, TriggerError};
pub use handlers::{
    GetTelemetryHandler, InvokeToolCommand, InvokeToolError, InvokeToolHandler, ListProjectsHandler,
    ListToolsHandler,
};
