//! OpenDomainHandler - fetches a domain detail and makes it the open domain.

use std::sync::Arc;

use crate::application::AssessmentSession;
use crate::domain::assessment::DomainAssessment;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{AssessmentReader, SourceError};

/// Command to open a domain.
#[derive(Debug, Clone)]
pub struct OpenDomainCommand {
    pub domain: String,
}

/// Result of opening a domain.
#[derive(Debug, Clone)]
pub struct OpenDomainResult {
    /// The domain as now displayed, with stored overrides applied.
    pub snapshot: DomainAssessment,
}

/// Errors raised while opening a domain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OpenDomainError {
    #[error("Domain not found: {0}")]
    NotFound(String),

    #[error("Failed to load domain {domain}: {source}")]
    Fetch { domain: String, source: SourceError },
}

impl From<OpenDomainError> for DomainError {
    fn from(err: OpenDomainError) -> Self {
        match &err {
            OpenDomainError::NotFound(domain) => {
                DomainError::new(ErrorCode::DomainNotFound, err.to_string())
                    .with_detail("domain", domain.clone())
            }
            OpenDomainError::Fetch { domain, .. } => {
                DomainError::new(ErrorCode::TransportError, err.to_string())
                    .with_detail("domain", domain.clone())
            }
        }
    }
}

/// Handler for opening a domain.
///
/// On failure the previously open domain stays open.
pub struct OpenDomainHandler {
    reader: Arc<dyn AssessmentReader>,
}

impl OpenDomainHandler {
    pub fn new(reader: Arc<dyn AssessmentReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        session: &mut AssessmentSession,
        cmd: OpenDomainCommand,
    ) -> Result<OpenDomainResult, OpenDomainError> {
        // 1. Fetch the detail
        let fetched = self
            .reader
            .get_domain_detail(&cmd.domain)
            .await
            .map_err(|e| match e {
                SourceError::DomainNotFound(domain) => OpenDomainError::NotFound(domain),
                source => OpenDomainError::Fetch {
                    domain: cmd.domain.clone(),
                    source,
                },
            })?;

        // 2. Apply stored overrides and recompute
        let overrides = session.overrides().get(&cmd.domain);
        let mut snapshot = DomainAssessment::open(fetched, &overrides);
        if snapshot.domain.is_empty() {
            snapshot.domain = cmd.domain.clone();
        }

        // 3. Replace the open domain and bring its cache entries in line
        session.replace_current(snapshot.clone());
        session.refresh_caches();

        tracing::info!(
            domain = %cmd.domain,
            questions = snapshot.questions.len(),
            overrides = overrides.len(),
            overall_score = ?snapshot.overall_score,
            "Domain opened"
        );

        Ok(OpenDomainResult { snapshot })
    }
}
