//! HTTP client adapter for a remote assessment service.

mod client;

pub use client::{HttpAssessmentClient, HttpClientConfig};
