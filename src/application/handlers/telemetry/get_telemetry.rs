//! GetTelemetryHandler - Query handler for the telemetry snapshot.

use crate::domain::telemetry::{TelemetryGenerator, TelemetrySnapshot};

/// Handler producing a fresh snapshot per request. Nothing is cached.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetTelemetryHandler {
    generator: TelemetryGenerator,
}

impl GetTelemetryHandler {
    pub fn new() -> Self {
        Self {
            generator: TelemetryGenerator::new(),
        }
    }

    pub fn handle(&self) -> TelemetrySnapshot {
        self.generator.snapshot()
    }
}
