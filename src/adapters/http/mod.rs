//! HTTP adapters - REST API implementations.

pub mod assessment;

use std::time::Duration;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

pub use assessment::{assessment_routes, AssessmentAppState};

/// Builds the service router with tracing, CORS and request timeout layers.
///
/// Without configured dashboard origins, CORS allows any origin.
pub fn build_router(state: AssessmentAppState, config: &ServerConfig) -> Router {
    assessment_routes(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(config))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.request_timeout_secs,
            ))),
    )
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    match config.allowed_origins() {
        Ok(origins) if origins.is_empty() => layer.allow_origin(Any),
        Ok(origins) => layer.allow_origin(AllowOrigin::list(origins)),
        Err(e) => {
            tracing::warn!(error = %e, "Cross-origin requests disabled");
            layer
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::adapters::storage::{FileAssessmentCatalog, InMemoryOverrideRepository};

    fn state() -> AssessmentAppState {
        AssessmentAppState::new(
            Arc::new(FileAssessmentCatalog::default()),
            Arc::new(InMemoryOverrideRepository::new()),
        )
    }

    #[tokio::test]
    async fn router_answers_health_check() {
        let app = build_router(state(), &ServerConfig::default());
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn configured_origin_is_echoed() {
        let config = ServerConfig {
            dashboard_origins: Some("http://localhost:5173".to_string()),
            ..Default::default()
        };
        let app = build_router(state(), &config);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/domains")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:5173"
        );
    }
}
