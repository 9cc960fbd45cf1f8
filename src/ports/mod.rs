//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RandomSource` - Entropy for the tool simulator
//! - `ProjectReader` - Project gallery listing
//! - `DashboardApi` - HTTP surface as seen by the dashboard consumers

mod dashboard_api;
mod project_reader;
mod random_source;

pub use dashboard_api::{DashboardApi, DashboardClientError};
pub use project_reader::ProjectReader;
pub use random_source::RandomSource;
