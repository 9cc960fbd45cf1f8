//! Dashboard consumers.
//!
//! Client-side components that call the dashboard API and publish their
//! view state through `watch` channels.

mod telemetry_poller;
mod tool_runner;

pub use telemetry_poller::{PollerHandle, TelemetryPoller, TelemetryPollerConfig};
pub use tool_runner::{ToolRunner, TriggerError, CANCELLED_MESSAGE};
