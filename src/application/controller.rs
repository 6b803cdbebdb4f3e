//! PropagationController - owns the session and routes every mutation.
//!
//! Views read through [`PropagationController::session`] and subscribe to
//! `score.changed.v1` on the event bus; all writes go through
//! [`open_domain`](PropagationController::open_domain) and
//! [`on_score_change`](PropagationController::on_score_change). Both take
//! `&mut self`, so two changes can never interleave.
//!
//! # Example
//!
//! ```ignore
//! let mut controller = PropagationController::start(reader, overrides, bus).await;
//! controller.open_domain("sales").await?;
//! let result = controller.on_score_change("sales", "Q3", Some(2)).await?;
//! assert_eq!(result.snapshot.overall_score, Some(3.33));
//! ```

use std::sync::Arc;

use super::handlers::{
    ChangeScoreCommand, ChangeScoreError, ChangeScoreHandler, ChangeScoreResult, DataSource,
    OpenDomainCommand, OpenDomainError, OpenDomainHandler, StartSessionHandler,
};
use super::AssessmentSession;
use crate::domain::assessment::DomainAssessment;
use crate::ports::{AssessmentReader, EventPublisher, OverrideRepository};

pub struct PropagationController {
    session: AssessmentSession,
    degraded: Vec<DataSource>,
    open_handler: OpenDomainHandler,
    change_handler: ChangeScoreHandler,
}

impl PropagationController {
    /// Loads the caches and overrides, then returns a controller with no domain open.
    pub async fn start(
        reader: Arc<dyn AssessmentReader>,
        overrides: Arc<dyn OverrideRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        let started = StartSessionHandler::new(Arc::clone(&reader), Arc::clone(&overrides))
            .handle()
            .await;

        Self {
            session: started.session,
            degraded: started.degraded,
            open_handler: OpenDomainHandler::new(reader),
            change_handler: ChangeScoreHandler::new(overrides, event_publisher),
        }
    }

    /// Wraps an already-built session.
    pub fn with_session(
        session: AssessmentSession,
        reader: Arc<dyn AssessmentReader>,
        overrides: Arc<dyn OverrideRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            session,
            degraded: Vec::new(),
            open_handler: OpenDomainHandler::new(reader),
            change_handler: ChangeScoreHandler::new(overrides, event_publisher),
        }
    }

    pub fn session(&self) -> &AssessmentSession {
        &self.session
    }

    /// Startup sources that fell back to empty defaults.
    pub fn degraded_sources(&self) -> &[DataSource] {
        &self.degraded
    }

    /// Fetches `domain` and makes it the open domain.
    pub async fn open_domain(&mut self, domain: &str) -> Result<&DomainAssessment, OpenDomainError> {
        self.open_handler
            .handle(
                &mut self.session,
                OpenDomainCommand {
                    domain: domain.to_string(),
                },
            )
            .await?;

        self.session
            .current()
            .ok_or_else(|| OpenDomainError::NotFound(domain.to_string()))
    }

    /// Applies a score change (or clears it with `None`) to the open domain.
    pub async fn on_score_change(
        &mut self,
        domain: &str,
        question_id: &str,
        score: Option<i64>,
    ) -> Result<ChangeScoreResult, ChangeScoreError> {
        self.change_handler
            .handle(
                &mut self.session,
                ChangeScoreCommand {
                    domain: domain.to_string(),
                    question_id: question_id.to_string(),
                    score,
                },
            )
            .await
    }
}
