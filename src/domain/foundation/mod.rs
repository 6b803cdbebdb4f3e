//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, event infrastructure and error types
//! that form the vocabulary of the maturity assessment domain.

mod errors;
mod events;
mod score;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{DomainEvent, EventEnvelope, EventId, SerializableDomainEvent};
pub use score::Score;
pub use timestamp::Timestamp;

pub use crate::domain_event;
