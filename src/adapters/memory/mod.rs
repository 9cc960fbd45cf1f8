//! In-memory adapters for development and tests.

mod in_memory_project_reader;

pub use in_memory_project_reader::InMemoryProjectReader;
