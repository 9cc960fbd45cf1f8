//! HTTP routes for the telemetry endpoint.

use axum::routing::get;
use axum::Router;

use super::handlers::get_telemetry;

pub fn telemetry_routes() -> Router {
    Router::new()
        // GET /api/telemetry
        .route("/api/telemetry", get(get_telemetry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    async fn fetch() -> Value {
        let response = telemetry_routes()
            .oneshot(
                Request::builder()
                    .uri("/api/telemetry")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn responses_differ_only_in_timestamp() {
        let mut first = fetch().await;
        let mut second = fetch().await;
        assert!(first["timestamp"].as_str().unwrap().ends_with('Z'));

        first.as_object_mut().unwrap().remove("timestamp");
        second.as_object_mut().unwrap().remove("timestamp");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn post_is_not_allowed() {
        let response = telemetry_routes()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/telemetry")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
