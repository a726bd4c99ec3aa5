//! Store configuration.

use std::time::Duration;

/// Store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory match records are written to
    pub data_dir: String,
    /// Debounce window for edit-triggered autosaves
    pub autosave_debounce: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: "./data/matches".to_string(),
            autosave_debounce: Duration::from_secs(2),
        }
    }
}

impl StoreConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("MCLIP_DATA_DIR")
                .unwrap_or_else(|_| "./data/matches".to_string()),
            autosave_debounce: Duration::from_millis(
                std::env::var("MCLIP_AUTOSAVE_DEBOUNCE_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(2000),
            ),
        }
    }
}
