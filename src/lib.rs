//! Portfolio Dashboard - Mock security telemetry and tool simulation API
//!
//! Serves the data behind the cybersecurity dashboard of a portfolio site:
//! canned MCP tool results, static WAF / Arcjet / MCP telemetry and the
//! project gallery. All security figures are illustrative.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
