//! In-memory store for tests and embedding.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use mclip_models::MatchRecord;

use crate::error::StoreResult;

/// Keeps the record in memory behind a shared lock.
///
/// Clones share the same underlying record, so a clone handed to the
/// autosaver stays observable from the test or caller.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<MatchRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the stored record.
    pub async fn load(&self) -> StoreResult<MatchRecord> {
        Ok(self.inner.read().await.clone())
    }

    /// Overwrite the stored record, returning the fresh `lastUpdated`.
    pub async fn save(&self, record: &MatchRecord) -> StoreResult<DateTime<Utc>> {
        let mut stored = record.clone();
        stored.last_updated = Utc::now();
        let stamp = stored.last_updated;
        *self.inner.write().await = stored;
        Ok(stamp)
    }

    /// Clear back to the empty initial record.
    pub async fn reset(&self) -> StoreResult<DateTime<Utc>> {
        self.save(&MatchRecord::empty()).await
    }
}
