//! Assessment domain events.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{domain_event, EventId, Score, Timestamp};

/// Event type published after every completed score change.
pub const SCORE_CHANGED_EVENT: &str = "score.changed.v1";

/// Published once a score change has been applied to the snapshot and caches.
///
/// Carries the fresh domain aggregates so views can redraw selectively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreChangedEvent {
    pub event_id: EventId,
    pub domain: String,
    pub question_id: String,
    /// New override, or `None` when the override was cleared.
    pub score: Option<Score>,
    pub overall_score: Option<f64>,
    pub changed_at: Timestamp,
}

domain_event!(
    ScoreChangedEvent,
    event_type = SCORE_CHANGED_EVENT,
    aggregate_id = domain,
    aggregate_type = "Domain",
    occurred_at = changed_at,
    event_id = event_id
);
