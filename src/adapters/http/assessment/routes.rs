//! HTTP routes for assessment endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    get_domain_detail, get_overview, health_check, list_domains, list_overrides, save_override,
    AssessmentAppState,
};

/// Creates the assessment router with all routes.
pub fn assessment_routes(state: AssessmentAppState) -> Router {
    Router::new()
        // GET /api/domains
        .route("/api/domains", get(list_domains))
        // GET /api/overview
        .route("/api/overview", get(get_overview))
        // GET /api/domain/:name
        .route("/api/domain/:name", get(get_domain_detail))
        // GET /api/overrides
        .route("/api/overrides", get(list_overrides))
        // POST /api/override
        .route("/api/override", post(save_override))
        .route("/health", get(health_check))
        .with_state(state)
}
