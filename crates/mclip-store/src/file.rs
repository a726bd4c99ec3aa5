//! JSON file store for match records.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::debug;

use mclip_models::{MatchId, MatchRecord};

use crate::config::StoreConfig;
use crate::error::StoreResult;

/// Stores one match record as a JSON document under a data directory.
///
/// Writes go through a temp file and rename, so readers never observe a
/// partially written record.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
    match_id: MatchId,
}

impl FileStore {
    /// Create a store for the given match under `dir`.
    pub fn new(dir: impl Into<PathBuf>, match_id: MatchId) -> Self {
        Self {
            dir: dir.into(),
            match_id,
        }
    }

    /// Create a store from configuration.
    pub fn from_config(config: &StoreConfig, match_id: MatchId) -> Self {
        Self::new(&config.data_dir, match_id)
    }

    /// Path of the stored document.
    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.match_id))
    }

    /// Load the stored record, or the empty initial record if nothing
    /// has been saved yet.
    pub async fn load(&self) -> StoreResult<MatchRecord> {
        let path = self.path();
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No stored record, starting empty");
                Ok(MatchRecord::empty())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Overwrite the stored record, returning the fresh `lastUpdated`.
    pub async fn save(&self, record: &MatchRecord) -> StoreResult<DateTime<Utc>> {
        let mut stored = record.clone();
        stored.last_updated = Utc::now();

        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.path();
        let tmp = tmp_path(&path);
        let json = serde_json::to_vec_pretty(&stored)?;
        tokio::fs::write(&tmp, &json).await?;
        tokio::fs::rename(&tmp, &path).await?;

        debug!(
            path = %path.display(),
            points = stored.points.len(),
            "Record saved"
        );
        Ok(stored.last_updated)
    }

    /// Clear back to the empty initial record.
    pub async fn reset(&self) -> StoreResult<DateTime<Utc>> {
        self.save(&MatchRecord::empty()).await
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}
