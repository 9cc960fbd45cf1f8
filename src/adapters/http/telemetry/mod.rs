//! Telemetry HTTP adapter module.

pub mod handlers;
pub mod routes;

pub use routes::telemetry_routes;
