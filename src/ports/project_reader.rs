//! Project reader port (read side).
//!
//! Lists the projects shown in the portfolio gallery. Writes happen through
//! the admin UI and are not part of this service.

use crate::domain::foundation::DomainError;
use crate::domain::projects::ProjectSummary;
use async_trait::async_trait;

/// Reader port for the project gallery.
#[async_trait]
pub trait ProjectReader: Send + Sync {
    /// All projects, ordered by id ascending.
    async fn list_projects(&self) -> Result<Vec<ProjectSummary>, DomainError>;
}
