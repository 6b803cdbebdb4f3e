//! AssessmentReader port - read access to pre-computed assessment data.

use async_trait::async_trait;

use crate::domain::assessment::{DomainAssessment, DomainSummary, Overview};

/// Read-only port for assessment data.
#[async_trait]
pub trait AssessmentReader: Send + Sync {
    /// Lists the summary entry of every domain.
    async fn list_domains(&self) -> Result<Vec<DomainSummary>, SourceError>;

    /// Gets the cross-domain comparison matrix.
    async fn get_overview(&self) -> Result<Overview, SourceError>;

    /// Gets the full detail (questions, pillars, stats) of one domain.
    async fn get_domain_detail(&self, domain: &str) -> Result<DomainAssessment, SourceError>;
}

/// Errors raised by assessment and override sources.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    #[error("Domain not found: {0}")]
    DomainNotFound(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Rejected by remote: {0}")]
    Rejected(String),
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::InvalidPayload(err.to_string())
    }
}
