//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `events` - In-process event bus
//! - `storage` - Data-directory catalog and in-memory override store
//! - `http` - Axum assessment service
//! - `http_client` - Reqwest client for a remote assessment service

pub mod events;
pub mod http;
pub mod http_client;
pub mod storage;

pub use events::InMemoryEventBus;
pub use http_client::{HttpAssessmentClient, HttpClientConfig};
pub use storage::{FileAssessmentCatalog, InMemoryOverrideRepository};
