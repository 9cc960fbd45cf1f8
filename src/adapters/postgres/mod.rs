//! PostgreSQL adapters - Database implementations for reader ports.
//!
//! - `PostgresProjectReader` - Project gallery listing

mod project_reader;

pub use project_reader::PostgresProjectReader;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;

/// Opens a connection pool sized from `config`.
pub async fn connect_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect(config.url())
        .await
}
