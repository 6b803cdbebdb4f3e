//! OverrideRepository port - remote persistence of score overrides.

use async_trait::async_trait;

use super::SourceError;
use crate::domain::assessment::{OverrideRecord, OverrideStore};

/// Port for the remote key-value store holding overrides between sessions.
///
/// The running session treats its in-memory store as the source of truth;
/// this port only seeds it at startup and receives best-effort copies of
/// each change.
#[async_trait]
pub trait OverrideRepository: Send + Sync {
    /// Loads every stored override.
    async fn load_all(&self) -> Result<OverrideStore, SourceError>;

    /// Stores one override, or removes it when `record.score` is `None`.
    async fn save(&self, record: &OverrideRecord) -> Result<(), SourceError>;
}
