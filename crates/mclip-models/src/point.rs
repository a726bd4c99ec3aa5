//! Points on the video timeline and their score snapshots.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::player::{Player, PlayerNum};

/// Boundary annotation on a point, used to render section breaks in the
/// point list.
///
/// Only set, tiebreak, and tiebreak-start boundaries are recorded by the
/// scorer; `Game` is accepted when loading older logs but is no longer
/// produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Divider {
    Game,
    Set,
    Tiebreak,
    TiebreakStart,
}

impl Divider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Divider::Game => "game",
            Divider::Set => "set",
            Divider::Tiebreak => "tiebreak",
            Divider::TiebreakStart => "tiebreak-start",
        }
    }
}

impl fmt::Display for Divider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Snapshot of both players' score state after a point resolves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSnapshot {
    pub player1: Player,
    pub player2: Player,
    pub in_tiebreak: bool,
}

/// A scored point anchored to the video timeline.
///
/// Times are video seconds. `score_state` captures the state immediately
/// after this point resolved; `divider` marks a set-level boundary the
/// point crossed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    /// Video time the point started, seconds
    pub start_time: Option<f64>,

    /// Video time the point ended, seconds
    pub end_time: Option<f64>,

    /// Who won the point
    pub winner: Option<PlayerNum>,

    /// State after this point resolved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_state: Option<ScoreSnapshot>,

    /// Boundary crossed by this point
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divider: Option<Divider>,
}

impl Point {
    /// A fully recorded point.
    pub fn recorded(start_time: f64, end_time: f64, winner: PlayerNum) -> Self {
        Self {
            start_time: Some(start_time),
            end_time: Some(end_time),
            winner: Some(winner),
            score_state: None,
            divider: None,
        }
    }

    /// Whether `time` falls inside this point's recorded interval.
    pub fn contains(&self, time: f64) -> bool {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => time >= start && time <= end,
            _ => false,
        }
    }

    /// Whether `[start, end]` overlaps this point's recorded interval.
    pub fn overlaps(&self, start: f64, end: f64) -> bool {
        match (self.start_time, self.end_time) {
            (Some(own_start), Some(own_end)) => start < own_end && own_start < end,
            _ => false,
        }
    }
}
