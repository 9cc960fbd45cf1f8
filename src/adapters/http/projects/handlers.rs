//! HTTP handlers for the project gallery.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::application::handlers::ListProjectsHandler;
use crate::domain::foundation::DomainError;
use crate::ports::ProjectReader;

use super::super::error::ErrorResponse;
use super::dto::ProjectListResponse;

/// Projects API error that implements IntoResponse.
#[derive(Debug)]
pub struct ProjectsApiError(pub DomainError);

impl IntoResponse for ProjectsApiError {
    fn into_response(self) -> Response {
        ErrorResponse::new(self.0.message).with_status(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

#[derive(Clone)]
pub struct ProjectsAppState {
    pub project_reader: Arc<dyn ProjectReader>,
}

impl ProjectsAppState {
    pub fn new(project_reader: Arc<dyn ProjectReader>) -> Self {
        Self { project_reader }
    }

    pub fn list_projects_handler(&self) -> ListProjectsHandler {
        ListProjectsHandler::new(self.project_reader.clone())
    }
}

/// GET /api/projects
pub async fn list_projects(
    State(state): State<ProjectsAppState>,
) -> Result<Json<ProjectListResponse>, ProjectsApiError> {
    let projects = state.list_projects_handler().handle().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to list projects");
        ProjectsApiError(e)
    })?;

    Ok(Json(ProjectListResponse { projects }))
}
