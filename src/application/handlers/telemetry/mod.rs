//! Telemetry query handlers.

mod get_telemetry;

pub use get_telemetry::GetTelemetryHandler;
