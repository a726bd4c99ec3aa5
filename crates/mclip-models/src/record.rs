//! The persisted match record.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::config::MatchConfig;
use crate::names::PlayerNames;
use crate::point::Point;

/// Unique identifier for a stored match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct MatchId(pub String);

impl MatchId {
    /// Generate a new random match ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Create from an existing string.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MatchId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Full persisted state of a match: the point log, the scoring
/// configuration, and the player names.
///
/// Loads and saves always carry the whole record; a save overwrites the
/// stored document and stamps a fresh `last_updated`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    /// Chronological point log
    #[serde(default)]
    pub points: Vec<Point>,

    /// Scoring configuration, unset until the match is configured
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub match_config: Option<MatchConfig>,

    /// Player display names
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub player_names: Option<PlayerNames>,

    /// When the record was last written
    pub last_updated: DateTime<Utc>,
}

impl MatchRecord {
    /// Empty initial record.
    pub fn empty() -> Self {
        Self {
            points: Vec::new(),
            match_config: None,
            player_names: None,
            last_updated: Utc::now(),
        }
    }

    /// Record with content, stamped now.
    pub fn new(
        points: Vec<Point>,
        match_config: Option<MatchConfig>,
        player_names: Option<PlayerNames>,
    ) -> Self {
        Self {
            points,
            match_config,
            player_names,
            last_updated: Utc::now(),
        }
    }

    /// Whether the record holds no scoring data.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.match_config.is_none() && self.player_names.is_none()
    }
}

impl Default for MatchRecord {
    fn default() -> Self {
        Self::empty()
    }
}
