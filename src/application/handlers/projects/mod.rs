//! Project query handlers.

mod list_projects;

pub use list_projects::ListProjectsHandler;
