//! In-memory Override Repository
//!
//! Key-value store for score overrides that lives as long as the process.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::assessment::{OverrideRecord, OverrideStore};
use crate::ports::{OverrideRepository, SourceError};

/// Override repository backed by an [`OverrideStore`] behind an async lock.
#[derive(Debug, Default)]
pub struct InMemoryOverrideRepository {
    store: RwLock<OverrideStore>,
}

impl InMemoryOverrideRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with `store`.
    pub fn with_store(store: OverrideStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    /// Returns a copy of the current contents.
    pub async fn snapshot(&self) -> OverrideStore {
        self.store.read().await.clone()
    }
}

#[async_trait]
impl OverrideRepository for InMemoryOverrideRepository {
    async fn load_all(&self) -> Result<OverrideStore, SourceError> {
        Ok(self.snapshot().await)
    }

    async fn save(&self, record: &OverrideRecord) -> Result<(), SourceError> {
        self.store
            .write()
            .await
            .set(&record.domain, &record.question_id, record.score);
        Ok(())
    }
}
