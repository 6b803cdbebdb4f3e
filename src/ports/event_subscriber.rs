//! EventSubscriber port - the subscription point for views.
//!
//! Views register an `EventHandler` for `score.changed.v1` and redraw
//! whatever depends on the domain named in the event.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Handler for processing domain events.
///
/// # Example
///
/// ```ignore
/// struct HeatmapView { /* ... */ }
///
/// #[async_trait]
/// impl EventHandler for HeatmapView {
///     async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
///         let changed: ScoreChangedEvent = event.payload_as()?;
///         // Redraw the row for changed.domain...
///         Ok(())
///     }
///
///     fn name(&self) -> &'static str {
///         "HeatmapView"
///     }
/// }
/// ```
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// Process an event.
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Handler name for logging.
    fn name(&self) -> &'static str;
}

/// Port for subscribing to domain events.
pub trait EventSubscriber: Send + Sync {
    /// Subscribe handler to a specific event type.
    fn subscribe(&self, event_type: &str, handler: Arc<dyn EventHandler>);
}

/// Combined trait for event bus implementations.
pub trait EventBus: super::EventPublisher + EventSubscriber {}

impl<T: super::EventPublisher + EventSubscriber> EventBus for T {}
