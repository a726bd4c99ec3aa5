//! Player state and set results.

use schemars::gen::SchemaGenerator;
use schemars::schema::Schema;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// One of the two players, serialized as the number `1` or `2` to match
/// the original store format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PlayerNum {
    One,
    Two,
}

impl PlayerNum {
    /// The other player.
    pub fn opponent(&self) -> PlayerNum {
        match self {
            PlayerNum::One => PlayerNum::Two,
            PlayerNum::Two => PlayerNum::One,
        }
    }

    pub fn as_number(&self) -> u8 {
        match self {
            PlayerNum::One => 1,
            PlayerNum::Two => 2,
        }
    }
}

impl fmt::Display for PlayerNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_number())
    }
}

impl From<PlayerNum> for u8 {
    fn from(p: PlayerNum) -> Self {
        p.as_number()
    }
}

impl TryFrom<u8> for PlayerNum {
    type Error = PlayerNumParseError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(PlayerNum::One),
            2 => Ok(PlayerNum::Two),
            _ => Err(PlayerNumParseError(n)),
        }
    }
}

#[derive(Debug, Error)]
#[error("Player number must be 1 or 2, got {0}")]
pub struct PlayerNumParseError(u8);

impl JsonSchema for PlayerNum {
    fn schema_name() -> String {
        "PlayerNum".to_string()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        // Serialized as a bare 1 or 2
        u8::json_schema(gen)
    }
}

/// Outcome of a completed set for one player.
///
/// Both players receive a `SetResult` at the same index when a set
/// concludes; exactly one of the pair has `won_set = true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetResult {
    /// Games won in the set (or tiebreak points in tiebreak-only mode)
    pub score: u32,

    /// Opponent's tiebreak point count, set only when the set was
    /// decided by a tiebreak
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiebreak_score: Option<u32>,

    /// Whether this player won the set
    pub won_set: bool,
}

impl SetResult {
    /// Result for a set won or lost on games alone.
    pub fn games(score: u32, won_set: bool) -> Self {
        Self {
            score,
            tiebreak_score: None,
            won_set,
        }
    }

    /// Result for a set decided by a tiebreak.
    pub fn tiebreak(score: u32, opponent_tiebreak_points: u32, won_set: bool) -> Self {
        Self {
            score,
            tiebreak_score: Some(opponent_tiebreak_points),
            won_set,
        }
    }
}

/// Live scoring state for one player.
///
/// `current_game` uses the 0-4 game-point encoding during regular games
/// (0=love, 1=15, 2=30, 3=40, 4=advantage) and holds the raw tiebreak
/// point count while a tiebreak is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Display name
    #[serde(default)]
    pub name: String,

    /// Completed sets, appended in lockstep with the opponent's
    #[serde(default)]
    pub completed_sets: Vec<SetResult>,

    /// Games won in the active set
    #[serde(default)]
    pub current_set: u32,

    /// Game points (0-4 encoding) or tiebreak points
    #[serde(default)]
    pub current_game: u32,

    /// Whether this player serves the next point
    #[serde(default)]
    pub is_serving: bool,
}

impl Player {
    /// Create a zero-initialized player.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Total games won across completed sets plus the active set.
    pub fn total_games_won(&self) -> u32 {
        self.completed_sets.iter().map(|s| s.score).sum::<u32>() + self.current_set
    }

    /// Sets won so far.
    pub fn sets_won(&self) -> usize {
        self.completed_sets.iter().filter(|s| s.won_set).count()
    }

    /// Reset all score counters, keeping the name.
    pub fn reset(&mut self) {
        self.completed_sets.clear();
        self.current_set = 0;
        self.current_game = 0;
        self.is_serving = false;
    }
}
