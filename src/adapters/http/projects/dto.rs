//! HTTP DTOs for the project gallery.

use serde::{Deserialize, Serialize};

pub use crate::domain::projects::ProjectSummary;

/// Body of `GET /api/projects`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectListResponse {
    pub projects: Vec<ProjectSummary>,
}
