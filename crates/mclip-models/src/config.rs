//! Match configuration.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::player::PlayerNum;

/// Tiebreak target for standard sets.
pub const TIEBREAK_TO_SEVEN: u32 = 7;
/// Tiebreak target for match (super) tiebreaks.
pub const TIEBREAK_TO_TEN: u32 = 10;

/// What kind of contest is being scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Full match: games, sets, and set tiebreaks at 6-6
    #[default]
    Match,
    /// The entire contest is a single tiebreak game
    Tiebreak,
}

impl MatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Match => "match",
            MatchType::Tiebreak => "tiebreak",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MatchType {
    type Err = MatchTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "match" => Ok(MatchType::Match),
            "tiebreak" => Ok(MatchType::Tiebreak),
            _ => Err(MatchTypeParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown match type: {0}")]
pub struct MatchTypeParseError(String);

/// Scoring configuration for a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchConfig {
    /// Match kind
    #[serde(rename = "type", default)]
    pub kind: MatchType,

    /// Points needed to win a tiebreak (7 or 10)
    #[serde(default = "default_tiebreak_points")]
    pub tiebreak_points: u32,

    /// No-ad scoring: the point after deuce wins the game outright
    #[serde(default)]
    pub no_ad: bool,

    /// Whether the active set has reached 6-6 and a tiebreak is in
    /// progress (only meaningful for `MatchType::Match`)
    #[serde(default)]
    pub in_tiebreak: bool,

    /// First server of the match, unset until the user picks one
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub first_server: Option<PlayerNum>,
}

fn default_tiebreak_points() -> u32 {
    TIEBREAK_TO_SEVEN
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            kind: MatchType::Match,
            tiebreak_points: TIEBREAK_TO_SEVEN,
            no_ad: false,
            in_tiebreak: false,
            first_server: None,
        }
    }
}

impl MatchConfig {
    /// Standard full-match configuration.
    pub fn standard() -> Self {
        Self::default()
    }

    /// Tiebreak-only configuration with the given target (7 or 10).
    pub fn tiebreak_only(tiebreak_points: u32) -> Self {
        Self {
            kind: MatchType::Tiebreak,
            tiebreak_points,
            ..Default::default()
        }
    }

    /// Whether the given target is an accepted tiebreak length.
    pub fn is_valid_tiebreak_points(points: u32) -> bool {
        points == TIEBREAK_TO_SEVEN || points == TIEBREAK_TO_TEN
    }

    /// Whether points are currently scored as tiebreak points.
    pub fn scores_as_tiebreak(&self) -> bool {
        self.kind == MatchType::Tiebreak || self.in_tiebreak
    }
}
