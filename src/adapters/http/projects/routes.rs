//! HTTP routes for the project gallery.

use axum::routing::get;
use axum::Router;

use super::handlers::{list_projects, ProjectsAppState};

pub fn projects_routes(state: ProjectsAppState) -> Router {
    Router::new()
        // GET /api/projects
        .route("/api/projects", get(list_projects))
        .with_state(state)
}
