//! Point-log persistence for the MatchClip backend.
//!
//! This crate provides:
//! - A JSON file store for match records (one document per match)
//! - An in-memory store for tests and embedding
//! - A debounced autosaver decoupled from the scoring state machine
//!
//! Loads and saves always carry the full [`mclip_models::MatchRecord`];
//! a save overwrites the stored document and stamps a fresh
//! `lastUpdated` (last-write-wins, no locking). Scoring never waits on a
//! save: persistence is fire-and-forget and failures are logged, not
//! propagated.

pub mod autosave;
pub mod config;
pub mod error;
pub mod file;
pub mod memory;

pub use autosave::{Autosaver, SaveTrigger};
pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use file::FileStore;
pub use memory::MemoryStore;

use chrono::{DateTime, Utc};
use mclip_models::MatchRecord;

/// A place match records are persisted to.
#[derive(Debug, Clone)]
pub enum MatchStore {
    File(FileStore),
    Memory(MemoryStore),
}

impl MatchStore {
    /// Load the stored record, or the empty initial record if nothing
    /// has been saved yet.
    pub async fn load(&self) -> StoreResult<MatchRecord> {
        match self {
            MatchStore::File(store) => store.load().await,
            MatchStore::Memory(store) => store.load().await,
        }
    }

    /// Overwrite the stored record, returning the fresh `lastUpdated`.
    pub async fn save(&self, record: &MatchRecord) -> StoreResult<DateTime<Utc>> {
        match self {
            MatchStore::File(store) => store.save(record).await,
            MatchStore::Memory(store) => store.save(record).await,
        }
    }

    /// Clear back to the empty initial record.
    pub async fn reset(&self) -> StoreResult<DateTime<Utc>> {
        match self {
            MatchStore::File(store) => store.reset().await,
            MatchStore::Memory(store) => store.reset().await,
        }
    }
}

impl From<FileStore> for MatchStore {
    fn from(store: FileStore) -> Self {
        MatchStore::File(store)
    }
}

impl From<MemoryStore> for MatchStore {
    fn from(store: MemoryStore) -> Self {
        MatchStore::Memory(store)
    }
}
