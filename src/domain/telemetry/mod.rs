//! Telemetry module - Static WAF, Arcjet and MCP metrics.

mod generator;
mod snapshot;

pub use generator::TelemetryGenerator;
pub use snapshot::{
    ArcjetLast24h, ArcjetTelemetry, McpLast24h, McpTelemetry, ServerStatus, TelemetrySnapshot,
    TypeCount, WafLast24h, WafTelemetry,
};
