//! Adapters - Implementations of port interfaces.
//!
//! - `http` - axum routes serving the dashboard API
//! - `client` - reqwest client for the dashboard consumers
//! - `postgres` - sqlx project reader
//! - `memory` - in-memory project reader
//! - `random` - thread-local RNG

pub mod client;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod random;

pub use client::HttpDashboardApi;
pub use memory::InMemoryProjectReader;
pub use postgres::PostgresProjectReader;
pub use random::ThreadRngSource;
