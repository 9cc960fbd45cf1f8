//! Projects HTTP adapter module.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::ProjectsAppState;
pub use routes::projects_routes;
