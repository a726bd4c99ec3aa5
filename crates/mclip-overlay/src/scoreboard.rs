//! Scoreboard frame construction.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use mclip_models::{MatchConfig, MatchType, Player, PlayerNames, PlayerNum, Point, ScoreSnapshot};
use mclip_scoring::game::format_game_score;
use mclip_scoring::{state_after_point, state_before_point, ScoreState, ScoringError, ScoringResult};

/// One completed-set cell on the scoreboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetCell {
    /// Games this player won in the set
    pub games: u32,

    /// This player's tiebreak points, when the set was decided by a
    /// tiebreak (rendered as a superscript)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiebreak_points: Option<u32>,
}

/// One player's row on the scoreboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreboardRow {
    /// Display name
    pub name: String,

    /// Serve marker for the next point
    pub serving: bool,

    /// Completed sets, oldest first
    pub sets: Vec<SetCell>,

    /// Games in the active set
    pub games: u32,

    /// Display string for the current game or tiebreak points
    pub points: String,
}

/// Everything the renderer draws for one scoreboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreboardFrame {
    pub player1: ScoreboardRow,
    pub player2: ScoreboardRow,

    /// Whether points are currently tiebreak points
    pub tiebreak: bool,
}

impl ScoreboardFrame {
    /// Build a frame from a score snapshot.
    pub fn from_snapshot(
        snapshot: &ScoreSnapshot,
        config: &MatchConfig,
        names: &PlayerNames,
    ) -> Self {
        let tiebreak = config.kind == MatchType::Tiebreak || snapshot.in_tiebreak;
        Self {
            player1: build_row(
                &snapshot.player1,
                &snapshot.player2,
                names,
                PlayerNum::One,
                tiebreak,
            ),
            player2: build_row(
                &snapshot.player2,
                &snapshot.player1,
                names,
                PlayerNum::Two,
                tiebreak,
            ),
            tiebreak,
        }
    }

    /// Build a frame from full scoring state.
    pub fn from_state(state: &ScoreState, names: &PlayerNames) -> Self {
        Self::from_snapshot(&state.snapshot(), &state.config, names)
    }
}

fn build_row(
    player: &Player,
    opponent: &Player,
    names: &PlayerNames,
    num: PlayerNum,
    tiebreak: bool,
) -> ScoreboardRow {
    let name = if player.name.is_empty() {
        names.for_player(num).to_string()
    } else {
        player.name.clone()
    };
    // The opponent's record holds this player's tiebreak count
    let sets = player
        .completed_sets
        .iter()
        .zip(&opponent.completed_sets)
        .map(|(own, theirs)| SetCell {
            games: own.score,
            tiebreak_points: theirs.tiebreak_score,
        })
        .collect();
    let points = if tiebreak {
        player.current_game.to_string()
    } else {
        format_game_score(player.current_game, opponent.current_game).to_string()
    };
    ScoreboardRow {
        name,
        serving: player.is_serving,
        sets,
        games: player.current_set,
        points,
    }
}

/// Frame for the state immediately before point `index` resolves.
///
/// Prefers the previous point's stored snapshot; falls back to replaying
/// `points[..index]`. `index` may equal `points.len()`.
pub fn frame_before(
    points: &[Point],
    config: &MatchConfig,
    names: &PlayerNames,
    index: usize,
) -> ScoringResult<ScoreboardFrame> {
    if index > points.len() {
        return Err(ScoringError::invalid_point(
            index,
            "beyond the end of the point log",
        ));
    }
    if index > 0 {
        if let Some(snapshot) = &points[index - 1].score_state {
            return Ok(ScoreboardFrame::from_snapshot(snapshot, config, names));
        }
    }
    let state = state_before_point(points, config, index)?;
    Ok(ScoreboardFrame::from_state(&state, names))
}

/// Frame for the state immediately after point `index` resolves.
///
/// Prefers the point's stored snapshot; falls back to replaying
/// `points[..=index]`.
pub fn frame_after(
    points: &[Point],
    config: &MatchConfig,
    names: &PlayerNames,
    index: usize,
) -> ScoringResult<ScoreboardFrame> {
    match points.get(index) {
        Some(point) => {
            if let Some(snapshot) = &point.score_state {
                return Ok(ScoreboardFrame::from_snapshot(snapshot, config, names));
            }
            let state = state_after_point(points, config, index)?;
            Ok(ScoreboardFrame::from_state(&state, names))
        }
        None => Err(ScoringError::invalid_point(
            index,
            "beyond the end of the point log",
        )),
    }
}
