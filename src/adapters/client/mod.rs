//! HTTP client adapters.

mod http_dashboard_api;

pub use http_dashboard_api::HttpDashboardApi;
