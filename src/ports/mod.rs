//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Assessment Ports
//!
//! - `AssessmentReader` - Summaries, overview matrix and domain details
//! - `OverrideRepository` - Remote key-value store for score overrides
//!
//! ## Event Ports
//!
//! - `EventPublisher` - Port for publishing domain events
//! - `EventSubscriber` - Port for subscribing to domain events
//! - `EventHandler` - Handler that processes incoming events

mod assessment_reader;
mod event_publisher;
mod event_subscriber;
mod override_repository;

pub use assessment_reader::{AssessmentReader, SourceError};
pub use event_publisher::EventPublisher;
pub use event_subscriber::{EventBus, EventHandler, EventSubscriber};
pub use override_repository::OverrideRepository;
