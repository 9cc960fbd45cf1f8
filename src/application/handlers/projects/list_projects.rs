//! ListProjectsHandler - Query handler for the project gallery.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::projects::ProjectSummary;
use crate::ports::ProjectReader;

pub struct ListProjectsHandler {
    reader: Arc<dyn ProjectReader>,
}

impl ListProjectsHandler {
    pub fn new(reader: Arc<dyn ProjectReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self) -> Result<Vec<ProjectSummary>, DomainError> {
        self.reader.list_projects().await
    }
}
