//! Application router: every module's routes plus the shared middleware.

use std::sync::Arc;

use axum::Router;
use http::{header, HeaderValue, Method};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::ports::{ProjectReader, RandomSource};

use super::mcp::{mcp_routes, McpAppState};
use super::projects::{projects_routes, ProjectsAppState};
use super::telemetry::telemetry_routes;

/// Dependencies shared by the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub random: Arc<dyn RandomSource>,
    pub project_reader: Arc<dyn ProjectReader>,
}

impl AppState {
    pub fn new(random: Arc<dyn RandomSource>, project_reader: Arc<dyn ProjectReader>) -> Self {
        Self {
            random,
            project_reader,
        }
    }
}

/// Routes without middleware.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .merge(mcp_routes(McpAppState::new(state.random)))
        .merge(telemetry_routes())
        .merge(projects_routes(ProjectsAppState::new(state.project_reader)))
}

/// Full application router with tracing, CORS and request timeout.
pub fn app_router(state: AppState, server: &ServerConfig) -> Router {
    api_routes(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(server))
            .layer(TimeoutLayer::new(server.request_timeout())),
    )
}

/// Any origin when none are configured, otherwise only the listed ones.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let origins = server.cors_origins_list();
    if origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    cors.allow_origin(allowed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryProjectReader;
    use crate::adapters::random::ThreadRngSource;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn state() -> AppState {
        AppState::new(
            Arc::new(ThreadRngSource::new()),
            Arc::new(InMemoryProjectReader::with_portfolio_projects()),
        )
    }

    #[tokio::test]
    async fn all_modules_are_mounted() {
        let app = app_router(state(), &ServerConfig::default());
        for uri in ["/api/telemetry", "/api/mcp/tools", "/api/projects"] {
            let response = app
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        }
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let response = app_router(state(), &ServerConfig::default())
            .oneshot(Request::builder().uri("/api/nothing").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn configured_origin_is_echoed() {
        let server = ServerConfig {
            cors_origins: Some("http://localhost:3000, https://portfolio.example".to_string()),
            ..ServerConfig::default()
        };
        let response = app_router(state(), &server)
            .oneshot(
                Request::builder()
                    .uri("/api/telemetry")
                    .header("origin", "https://portfolio.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "https://portfolio.example"
        );
    }

    #[tokio::test]
    async fn open_cors_when_no_origins_configured() {
        let response = app_router(state(), &ServerConfig::default())
            .oneshot(
                Request::builder()
                    .uri("/api/telemetry")
                    .header("origin", "http://anywhere.test")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
    }
}
