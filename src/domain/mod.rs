//! Domain layer containing the mock security data and dashboard state.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (timestamps, percentages, errors, state machines)
//! - `tools` - The simulated MCP tools and their result records
//! - `telemetry` - Static WAF / Arcjet / MCP metrics
//! - `dashboard` - Consumer lifecycles for the dashboard widgets
//! - `projects` - Portfolio project listing

pub mod dashboard;
pub mod foundation;
pub mod projects;
pub mod telemetry;
pub mod tools;
