//! ChangeScoreHandler - the single entry point for question score edits.
//!
//! One change runs, in order:
//! 1. validate the score and the target question
//! 2. update the live question
//! 3. update the override store and spawn its remote replication
//! 4. recompute the open domain
//! 5. refresh the summary entry and matrix row
//! 6. publish `score.changed.v1`
//!
//! Every local mutation happens before the first await, and nothing after
//! step 3 depends on the outcome of the replication.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::application::AssessmentSession;
use crate::domain::assessment::{
    AggregationEngine, DomainAssessment, OverrideRecord, ScoreChangedEvent,
};
use crate::domain::foundation::{
    DomainError, ErrorCode, EventId, Score, SerializableDomainEvent, Timestamp, ValidationError,
};
use crate::ports::{EventPublisher, OverrideRepository};

/// Command to change (or clear, with `None`) one question's score.
#[derive(Debug, Clone)]
pub struct ChangeScoreCommand {
    pub domain: String,
    pub question_id: String,
    pub score: Option<i64>,
}

/// Result of an applied score change.
#[derive(Debug)]
pub struct ChangeScoreResult {
    pub event: ScoreChangedEvent,
    /// The open domain after recomputation.
    pub snapshot: DomainAssessment,
    /// Background replication to the remote store; it never fails outward.
    pub persistence: JoinHandle<()>,
}

/// Reasons a score change is rejected. A rejected change mutates nothing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChangeScoreError {
    #[error("Invalid score: {0}")]
    InvalidScore(#[from] ValidationError),

    #[error("Domain is not open: {0}")]
    DomainNotOpen(String),

    #[error("Question {question_id} not found in domain {domain}")]
    QuestionNotFound { domain: String, question_id: String },
}

impl From<ChangeScoreError> for DomainError {
    fn from(err: ChangeScoreError) -> Self {
        let code = match err {
            ChangeScoreError::InvalidScore(_) => ErrorCode::ValidationFailed,
            ChangeScoreError::DomainNotOpen(_) => ErrorCode::DomainNotOpen,
            ChangeScoreError::QuestionNotFound { .. } => ErrorCode::QuestionNotFound,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Handler for score changes.
pub struct ChangeScoreHandler {
    overrides: Arc<dyn OverrideRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl ChangeScoreHandler {
    pub fn new(
        overrides: Arc<dyn OverrideRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            overrides,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        session: &mut AssessmentSession,
        cmd: ChangeScoreCommand,
    ) -> Result<ChangeScoreResult, ChangeScoreError> {
        // 1. Validate before touching anything
        let score = Score::parse_optional(cmd.score)?;

        let (current, overrides) = session.current_and_overrides_mut();
        let current = current
            .filter(|d| d.domain == cmd.domain)
            .ok_or_else(|| ChangeScoreError::DomainNotOpen(cmd.domain.clone()))?;

        // 2. Update the live question
        let question = current.question_mut(&cmd.question_id).ok_or_else(|| {
            ChangeScoreError::QuestionNotFound {
                domain: cmd.domain.clone(),
                question_id: cmd.question_id.clone(),
            }
        })?;
        question.set_override(score);

        // 3. Store the override and replicate it in the background
        overrides.set(&cmd.domain, &cmd.question_id, score);
        let persistence = self.spawn_persist(OverrideRecord::new(
            cmd.domain.clone(),
            cmd.question_id.clone(),
            score,
        ));

        // 4. Recompute the open domain
        AggregationEngine::recompute(current);
        let snapshot = current.clone();

        // 5. Refresh the summary entry and matrix row
        session.refresh_caches();

        tracing::debug!(
            domain = %cmd.domain,
            question_id = %cmd.question_id,
            score = ?score.map(|s| s.value()),
            overall_score = ?snapshot.overall_score,
            "Score change applied"
        );

        // 6. Notify subscribers
        let event = ScoreChangedEvent {
            event_id: EventId::new(),
            domain: cmd.domain,
            question_id: cmd.question_id,
            score,
            overall_score: snapshot.overall_score,
            changed_at: Timestamp::now(),
        };
        self.publish(&event).await;

        Ok(ChangeScoreResult {
            event,
            snapshot,
            persistence,
        })
    }

    fn spawn_persist(&self, record: OverrideRecord) -> JoinHandle<()> {
        let repository = Arc::clone(&self.overrides);
        tokio::spawn(async move {
            if let Err(e) = repository.save(&record).await {
                tracing::warn!(
                    domain = %record.domain,
                    question_id = %record.question_id,
                    error = %e,
                    "Failed to persist override"
                );
            }
        })
    }

    async fn publish(&self, event: &ScoreChangedEvent) {
        let envelope = match event.to_envelope() {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize score change event");
                return;
            }
        };

        if let Err(e) = self.event_publisher.publish(envelope).await {
            tracing::warn!(domain = %event.domain, error = %e, "Failed to publish score change");
        }
    }
}
