//! HTTP handlers for the telemetry endpoint.

use axum::Json;

use crate::application::handlers::GetTelemetryHandler;
use crate::domain::telemetry::TelemetrySnapshot;

/// GET /api/telemetry
pub async fn get_telemetry() -> Json<TelemetrySnapshot> {
    Json(GetTelemetryHandler::new().handle())
}
