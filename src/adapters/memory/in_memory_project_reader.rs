//! In-memory project reader.
//!
//! Serves a fixed project list when no database is configured. Listing
//! order matches the PostgreSQL reader: id ascending.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::projects::ProjectSummary;
use crate::ports::ProjectReader;

/// Read-only project catalog held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectReader {
    projects: Vec<ProjectSummary>,
}

impl InMemoryProjectReader {
    /// Creates a reader over `projects`, sorted by id.
    pub fn new(mut projects: Vec<ProjectSummary>) -> Self {
        projects.sort_by_key(|p| p.id);
        Self { projects }
    }

    /// Reader seeded with the dashboard-related portfolio projects.
    pub fn with_portfolio_projects() -> Self {
        Self::new(vec![
            project(
                1,
                "Database Integration",
                "PostgreSQL-backed storage for projects and admin data management.",
                "Database",
                &["PostgreSQL schema", "Server actions", "Admin CRUD"],
            ),
            project(
                2,
                "MCP Integration",
                "Tool tester for the roll-dice, person-app and digital-twin servers.",
                "Network",
                &["roll-dice", "person-app", "digital-twin"],
            ),
            project(
                3,
                "Security Dashboard",
                "WAF monitoring, rate limiting and simulated penetration testing.",
                "AlertTriangle",
                &["WAF telemetry", "Arcjet protections", "Penetration test results"],
            ),
        ])
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

fn project(id: i32, title: &str, description: &str, icon: &str, items: &[&str]) -> ProjectSummary {
    ProjectSummary {
        id,
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        items: items.iter().map(|item| item.to_string()).collect(),
    }
}

#[async_trait]
impl ProjectReader for InMemoryProjectReader {
    async fn list_projects(&self) -> Result<Vec<ProjectSummary>, DomainError> {
        Ok(self.projects.clone())
    }
}
