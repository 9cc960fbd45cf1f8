//! Projects module - Entries of the portfolio project gallery.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Icon used when a stored project names none.
pub const DEFAULT_ICON: &str = "Shield";

/// One project card: a title, a blurb and a list of highlights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub items: Vec<String>,
}

impl ProjectSummary {
    /// Builds a project, rejecting a blank title.
    ///
    /// A blank icon falls back to [`DEFAULT_ICON`].
    pub fn new(
        id: i32,
        title: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
        items: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        let icon = icon.into();
        let icon = if icon.trim().is_empty() {
            DEFAULT_ICON.to_string()
        } else {
            icon
        };
        Ok(Self {
            id,
            title,
            description: description.into(),
            icon,
            items,
        })
    }
}
