//! Point-log replay engine.
//!
//! Reconstructs match state by re-applying stored point outcomes from
//! scratch, using the same transition as live scoring. Replay backs the
//! persistence round-trip and the clip export renderer: captions and
//! burned-in scoreboards for a historical point come from replaying the
//! log up to that point, so replayed state must be byte-identical to
//! what the live scorer produced.
//!
//! All functions here are pure. They read their inputs, allocate fresh
//! output state, and can run concurrently from any number of export
//! requests.

use tracing::trace;

use mclip_models::{Divider, MatchConfig, Point, PlayerNum, ScoreSnapshot};

use crate::error::{ScoringError, ScoringResult};
use crate::transition::{apply_point, ScoreState};

/// One replayed point: the state around it and the boundary it crossed.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayedPoint {
    /// Index in the point log
    pub index: usize,
    /// State immediately before the point
    pub before: ScoreSnapshot,
    /// State immediately after the point
    pub after: ScoreSnapshot,
    /// Divider derived for the point
    pub divider: Option<Divider>,
}

/// Replay a full point log, returning the final state.
///
/// Players start zero-initialized with serving taken from the config's
/// first server; `in_tiebreak` is forced off at the start because replay
/// always reconstructs from the beginning of the match. A malformed
/// point fails deterministically with its index.
pub fn recalculate_score(points: &[Point], config: &MatchConfig) -> ScoringResult<ScoreState> {
    let mut state = initial_state(config);
    for (index, point) in points.iter().enumerate() {
        state = step(&state, point, index)?.state;
    }
    Ok(state)
}

/// Replay a point log, capturing per-point before/after snapshots.
pub fn replay_timeline(
    points: &[Point],
    config: &MatchConfig,
) -> ScoringResult<Vec<ReplayedPoint>> {
    let mut state = initial_state(config);
    let mut timeline = Vec::with_capacity(points.len());
    for (index, point) in points.iter().enumerate() {
        let before = state.snapshot();
        let applied = step(&state, point, index)?;
        timeline.push(ReplayedPoint {
            index,
            before,
            after: applied.state.snapshot(),
            divider: applied.divider,
        });
        state = applied.state;
    }
    Ok(timeline)
}

/// State immediately before point `index` resolves: the fold of
/// `points[..index]`.
///
/// `index` may equal `points.len()`, giving the state after the whole
/// log (the "before" of a point yet to be played).
pub fn state_before_point(
    points: &[Point],
    config: &MatchConfig,
    index: usize,
) -> ScoringResult<ScoreState> {
    let prefix = points
        .get(..index)
        .ok_or_else(|| ScoringError::invalid_point(index, "beyond the end of the point log"))?;
    recalculate_score(prefix, config)
}

/// State immediately after point `index` resolves: the fold of
/// `points[..=index]`.
pub fn state_after_point(
    points: &[Point],
    config: &MatchConfig,
    index: usize,
) -> ScoringResult<ScoreState> {
    let prefix = points
        .get(..=index)
        .ok_or_else(|| ScoringError::invalid_point(index, "beyond the end of the point log"))?;
    recalculate_score(prefix, config)
}

/// Verify a stored log against recomputation.
///
/// Replays the log and compares each point's stored `score_state` and
/// `divider` to the recomputed values, failing with the first diverging
/// index. Points without a stored snapshot are only replayed.
pub fn verify_log(points: &[Point], config: &MatchConfig) -> ScoringResult<()> {
    let mut state = initial_state(config);
    for (index, point) in points.iter().enumerate() {
        let applied = step(&state, point, index)?;
        if let Some(stored) = &point.score_state {
            if *stored != applied.state.snapshot() {
                return Err(ScoringError::Divergence { index });
            }
        }
        if point.divider != applied.divider {
            return Err(ScoringError::Divergence { index });
        }
        state = applied.state;
    }
    Ok(())
}

struct ReplayStep {
    state: ScoreState,
    divider: Option<Divider>,
}

fn initial_state(config: &MatchConfig) -> ScoreState {
    let mut config = config.clone();
    config.in_tiebreak = false;
    ScoreState::new(config)
}

fn step(state: &ScoreState, point: &Point, index: usize) -> ScoringResult<ReplayStep> {
    let winner: PlayerNum = point
        .winner
        .ok_or_else(|| ScoringError::invalid_point(index, "missing winner"))?;
    let applied = apply_point(state, winner)
        .map_err(|e| ScoringError::invalid_point(index, e.to_string()))?;
    trace!(index, winner = %winner, "Replayed point");
    Ok(ReplayStep {
        divider: applied.boundary.and_then(|b| b.divider()),
        state: applied.state,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> MatchConfig {
        MatchConfig {
            first_server: Some(PlayerNum::One),
            ..Default::default()
        }
    }

    fn points_for(winners: &[PlayerNum]) -> Vec<Point> {
        winners
            .iter()
            .enumerate()
            .map(|(i, &w)| Point::recorded(i as f64 * 10.0, i as f64 * 10.0 + 5.0, w))
            .collect()
    }

    #[test]
    fn test_empty_log_is_initial_state() {
        let state = recalculate_score(&[], &config()).unwrap();
        assert_eq!(state.player1.current_game, 0);
        assert_eq!(state.player2.current_game, 0);
        assert_eq!(state.server(), Some(PlayerNum::One));
    }

    #[test]
    fn test_replay_game() {
        let points = points_for(&[PlayerNum::One; 4]);
        let state = recalculate_score(&points, &config()).unwrap();
        assert_eq!(state.player1.current_set, 1);
        assert_eq!(state.player1.current_game, 0);
        assert_eq!(state.server(), Some(PlayerNum::Two));
    }

    #[test]
    fn test_replay_is_idempotent() {
        let winners: Vec<PlayerNum> = (0..50)
            .map(|i| if i % 3 == 0 { PlayerNum::Two } else { PlayerNum::One })
            .collect();
        let points = points_for(&winners);
        let first = recalculate_score(&points, &config()).unwrap();
        let second = recalculate_score(&points, &config()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_winner_names_index() {
        let mut points = points_for(&[PlayerNum::One; 3]);
        points[1].winner = None;
        let err = recalculate_score(&points, &config()).unwrap_err();
        assert_eq!(
            err,
            ScoringError::invalid_point(1, "missing winner")
        );
    }

    #[test]
    fn test_unset_first_server_fails_at_first_point() {
        let points = points_for(&[PlayerNum::One]);
        let err = recalculate_score(&points, &MatchConfig::standard()).unwrap_err();
        assert!(err.is_replay());
        assert!(err.to_string().contains("0"));
    }

    #[test]
    fn test_initial_tiebreak_flag_is_ignored() {
        let mut cfg = config();
        cfg.in_tiebreak = true;
        let points = points_for(&[PlayerNum::One]);
        let state = recalculate_score(&points, &cfg).unwrap();
        // Replay starts from the beginning of the match, not mid-tiebreak
        assert_eq!(state.player1.current_game, 1);
        assert!(!state.config.in_tiebreak);
    }

    #[test]
    fn test_timeline_snapshots_chain() {
        let winners = [PlayerNum::One, PlayerNum::Two, PlayerNum::One, PlayerNum::One];
        let points = points_for(&winners);
        let timeline = replay_timeline(&points, &config()).unwrap();
        assert_eq!(timeline.len(), 4);
        for pair in timeline.windows(2) {
            assert_eq!(pair[0].after, pair[1].before);
        }
        assert_eq!(timeline[0].before.player1.current_game, 0);
        assert_eq!(timeline[0].after.player1.current_game, 1);
    }

    #[test]
    fn test_state_before_point_boundary_contract() {
        let points = points_for(&[PlayerNum::One; 4]);
        // Before point 0 is the zero state
        let before = state_before_point(&points, &config(), 0).unwrap();
        assert_eq!(before.player1.current_game, 0);
        // Before point 3 the game stands at 40-0
        let before = state_before_point(&points, &config(), 3).unwrap();
        assert_eq!(before.player1.current_game, 3);
        // After point 3 the game is won
        let after = state_after_point(&points, &config(), 3).unwrap();
        assert_eq!(after.player1.current_set, 1);
        // Before the next (unplayed) point equals after the log
        let end = state_before_point(&points, &config(), 4).unwrap();
        assert_eq!(end, after);
    }

    #[test]
    fn test_index_out_of_range() {
        let points = points_for(&[PlayerNum::One]);
        assert!(state_before_point(&points, &config(), 2).is_err());
        assert!(state_after_point(&points, &config(), 1).is_err());
    }

    #[test]
    fn test_verify_accepts_annotated_log() {
        // Build a log the way the live scorer would annotate it
        let winners = vec![PlayerNum::One; 24];
        let mut points = points_for(&winners);
        let timeline = replay_timeline(&points, &config()).unwrap();
        for (point, replayed) in points.iter_mut().zip(&timeline) {
            point.score_state = Some(replayed.after.clone());
            point.divider = replayed.divider;
        }
        assert!(verify_log(&points, &config()).is_ok());
    }

    #[test]
    fn test_verify_detects_tampered_snapshot() {
        let winners = vec![PlayerNum::One; 8];
        let mut points = points_for(&winners);
        let timeline = replay_timeline(&points, &config()).unwrap();
        for (point, replayed) in points.iter_mut().zip(&timeline) {
            point.score_state = Some(replayed.after.clone());
            point.divider = replayed.divider;
        }
        points[5].score_state.as_mut().unwrap().player1.current_game += 1;
        assert_eq!(
            verify_log(&points, &config()),
            Err(ScoringError::Divergence { index: 5 })
        );
    }

    #[test]
    fn test_verify_detects_wrong_divider() {
        let mut points = points_for(&[PlayerNum::One; 4]);
        points[0].divider = Some(Divider::Set);
        assert_eq!(
            verify_log(&points, &config()),
            Err(ScoringError::Divergence { index: 0 })
        );
    }
}
