//! StartSessionHandler - loads the caches and prior overrides at startup.

use std::fmt;
use std::sync::Arc;

use crate::application::AssessmentSession;
use crate::ports::{AssessmentReader, OverrideRepository};

/// A startup source that failed and was replaced by an empty default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Summaries,
    Overview,
    Overrides,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataSource::Summaries => "summaries",
            DataSource::Overview => "overview",
            DataSource::Overrides => "overrides",
        };
        write!(f, "{}", name)
    }
}

/// Result of session startup.
#[derive(Debug, Clone)]
pub struct StartSessionResult {
    pub session: AssessmentSession,
    /// Sources that could not be loaded.
    pub degraded: Vec<DataSource>,
}

/// Handler for starting a session.
///
/// Never fails: each source that cannot be fetched is replaced by its empty
/// default and reported in `degraded`.
pub struct StartSessionHandler {
    reader: Arc<dyn AssessmentReader>,
    overrides: Arc<dyn OverrideRepository>,
}

impl StartSessionHandler {
    pub fn new(reader: Arc<dyn AssessmentReader>, overrides: Arc<dyn OverrideRepository>) -> Self {
        Self { reader, overrides }
    }

    pub async fn handle(&self) -> StartSessionResult {
        let (summaries, overview, overrides) = futures::join!(
            self.reader.list_domains(),
            self.reader.get_overview(),
            self.overrides.load_all(),
        );

        let mut degraded = Vec::new();

        let summaries = summaries.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to load domain summaries, starting empty");
            degraded.push(DataSource::Summaries);
            Vec::new()
        });

        let mut overview = overview.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to load overview, starting empty");
            degraded.push(DataSource::Overview);
            Default::default()
        });
        overview.sort_by_overall_desc();

        let overrides = overrides.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to load overrides, starting empty");
            degraded.push(DataSource::Overrides);
            Default::default()
        });

        tracing::info!(
            domains = summaries.len(),
            matrix_rows = overview.matrix.len(),
            overrides = overrides.len(),
            degraded = degraded.len(),
            "Assessment session started"
        );

        StartSessionResult {
            session: AssessmentSession::new(summaries, overview, overrides),
            degraded,
        }
    }
}
