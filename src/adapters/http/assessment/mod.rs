//! Assessment HTTP adapter module.
//!
//! Serves pre-computed assessment data and accepts score overrides.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{AckResponse, ErrorResponse, OverrideRequest};
pub use handlers::{AssessmentApiError, AssessmentAppState};
pub use routes::assessment_routes;
