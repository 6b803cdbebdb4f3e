//! HTTP handlers for assessment endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::response::IntoResponse;
use http::StatusCode;

use crate::domain::assessment::OverrideRecord;
use crate::domain::foundation::{Score, ValidationError};
use crate::ports::{AssessmentReader, OverrideRepository, SourceError};

use super::dto::{
    AckResponse, DomainAssessment, DomainSummary, ErrorResponse, OverrideRequest, OverrideStore,
    Overview,
};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Assessment API error that implements IntoResponse.
#[derive(Debug)]
pub enum AssessmentApiError {
    BadRequest(String),
    NotFound(String),
    Upstream(String),
    Internal(String),
}

impl IntoResponse for AssessmentApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            AssessmentApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            AssessmentApiError::NotFound(domain) => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found("Domain", &domain))
            }
            AssessmentApiError::Upstream(msg) => {
                (StatusCode::BAD_GATEWAY, ErrorResponse::bad_gateway(msg))
            }
            AssessmentApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<SourceError> for AssessmentApiError {
    fn from(error: SourceError) -> Self {
        match error {
            SourceError::DomainNotFound(domain) => AssessmentApiError::NotFound(domain),
            SourceError::Transport(msg) | SourceError::Rejected(msg) => {
                AssessmentApiError::Upstream(msg)
            }
            SourceError::InvalidPayload(msg) => {
                AssessmentApiError::Internal(format!("Invalid assessment data: {}", msg))
            }
        }
    }
}

impl From<ValidationError> for AssessmentApiError {
    fn from(error: ValidationError) -> Self {
        AssessmentApiError::BadRequest(error.to_string())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing assessment dependencies.
#[derive(Clone)]
pub struct AssessmentAppState {
    pub reader: Arc<dyn AssessmentReader>,
    pub overrides: Arc<dyn OverrideRepository>,
}

impl AssessmentAppState {
    pub fn new(reader: Arc<dyn AssessmentReader>, overrides: Arc<dyn OverrideRepository>) -> Self {
        Self { reader, overrides }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/domains
///
/// Returns the summary entry of every domain.
pub async fn list_domains(
    State(state): State<AssessmentAppState>,
) -> Result<Json<Vec<DomainSummary>>, AssessmentApiError> {
    let domains = state.reader.list_domains().await?;
    Ok(Json(domains))
}

/// GET /api/overview
///
/// Returns the cross-domain comparison matrix.
pub async fn get_overview(
    State(state): State<AssessmentAppState>,
) -> Result<Json<Overview>, AssessmentApiError> {
    let overview = state.reader.get_overview().await?;
    Ok(Json(overview))
}

/// GET /api/domain/:name
///
/// Returns the full detail of one domain, 404 when unknown.
pub async fn get_domain_detail(
    State(state): State<AssessmentAppState>,
    Path(name): Path<String>,
) -> Result<Json<DomainAssessment>, AssessmentApiError> {
    let detail = state.reader.get_domain_detail(&name).await?;
    Ok(Json(detail))
}

/// GET /api/overrides
///
/// Returns every stored override as `{ domain: { questionId: score } }`.
pub async fn list_overrides(
    State(state): State<AssessmentAppState>,
) -> Result<Json<OverrideStore>, AssessmentApiError> {
    let store = state.overrides.load_all().await?;
    Ok(Json(store))
}

/// POST /api/override
///
/// Stores one override, or removes it when `score` is null.
pub async fn save_override(
    State(state): State<AssessmentAppState>,
    Json(request): Json<OverrideRequest>,
) -> Result<Json<AckResponse>, AssessmentApiError> {
    if request.domain.trim().is_empty() {
        return Err(ValidationError::empty_field("domain").into());
    }
    if request.question_id.trim().is_empty() {
        return Err(ValidationError::empty_field("questionId").into());
    }

    let score = Score::parse_optional(request.score)?;

    let record = OverrideRecord::new(request.domain, request.question_id, score);
    state.overrides.save(&record).await?;

    tracing::debug!(
        domain = %record.domain,
        question_id = %record.question_id,
        score = ?record.score.map(|s| s.value()),
        "Override stored"
    );

    Ok(Json(AckResponse::ok()))
}

/// GET /health
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
