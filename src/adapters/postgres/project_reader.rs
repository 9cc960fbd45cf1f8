//! PostgreSQL implementation of ProjectReader.
//!
//! Expects a `projects` table with `items` stored as `text[]`.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::projects::{ProjectSummary, DEFAULT_ICON};
use crate::ports::ProjectReader;

/// PostgreSQL implementation of ProjectReader.
#[derive(Clone)]
pub struct PostgresProjectReader {
    pool: PgPool,
}

impl PostgresProjectReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectReader for PostgresProjectReader {
    async fn list_projects(&self) -> Result<Vec<ProjectSummary>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, description, icon, items
            FROM projects
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list projects: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_project).collect()
    }
}

fn column_error(column: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Failed to get {}: {}", column, e),
    )
}

fn row_to_project(row: sqlx::postgres::PgRow) -> Result<ProjectSummary, DomainError> {
    let id: i32 = row.try_get("id").map_err(|e| column_error("id", e))?;
    let title: String = row.try_get("title").map_err(|e| column_error("title", e))?;
    let description: Option<String> = row
        .try_get("description")
        .map_err(|e| column_error("description", e))?;
    let icon: Option<String> = row.try_get("icon").map_err(|e| column_error("icon", e))?;
    let items: Option<Vec<String>> = row.try_get("items").map_err(|e| column_error("items", e))?;

    ProjectSummary::new(
        id,
        title,
        description.unwrap_or_default(),
        icon.unwrap_or_else(|| DEFAULT_ICON.to_string()),
        items.unwrap_or_default(),
    )
    .map_err(|e| DomainError::from(e).with_detail("project_id", id.to_string()))
}
