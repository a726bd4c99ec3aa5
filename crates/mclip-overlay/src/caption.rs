//! Compact score captions for burned-in text and logs.

use mclip_models::{MatchConfig, PlayerNames, Point};
use mclip_scoring::{ScoringError, ScoringResult};

use crate::scoreboard::{frame_after, ScoreboardFrame};

/// One-line score reading, e.g. `"6-4 3-2 40-15"`.
///
/// Completed sets come first, then games in the active set, then the
/// current game points when any have been played. During a tiebreak the
/// games stay visible and the points are raw tiebreak counts; in
/// tiebreak-only mode only sets and points appear.
pub fn score_line(frame: &ScoreboardFrame) -> String {
    let mut parts = Vec::new();
    for (own, theirs) in frame.player1.sets.iter().zip(&frame.player2.sets) {
        parts.push(format!("{}-{}", own.games, theirs.games));
    }
    let in_tiebreak_only = frame.tiebreak && frame.player1.games == 0 && frame.player2.games == 0;
    if !in_tiebreak_only {
        parts.push(format!("{}-{}", frame.player1.games, frame.player2.games));
    }
    let points_blank = frame.player1.points == "0" && frame.player2.points == "0";
    if !points_blank {
        parts.push(format!("{}-{}", frame.player1.points, frame.player2.points));
    }
    parts.join(" ")
}

/// Caption for a recorded point: winner plus the score after the point.
pub fn point_caption(
    points: &[Point],
    config: &MatchConfig,
    names: &PlayerNames,
    index: usize,
) -> ScoringResult<String> {
    let point = points
        .get(index)
        .ok_or_else(|| ScoringError::invalid_point(index, "beyond the end of the point log"))?;
    let winner = point
        .winner
        .ok_or_else(|| ScoringError::invalid_point(index, "missing winner"))?;
    let frame = frame_after(points, config, names, index)?;
    let name = names.for_player(winner);
    let line = score_line(&frame);
    if line.is_empty() {
        Ok(format!("{} wins the point", name))
    } else {
        Ok(format!("{} wins the point ({})", name, line))
    }
}
