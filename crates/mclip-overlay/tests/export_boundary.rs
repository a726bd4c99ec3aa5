//! Export renderer boundary: "state before point N" must be exact.
//!
//! The renderer captions a clip of point N with the score as it stood
//! when the rally began. An off-by-one here shows the wrong score on
//! exported video, so the contract is pinned against both the stored
//! snapshots and the replay fallback.

use mclip_models::{MatchType, PlayerNames, PlayerNum};
use mclip_overlay::{frame_after, frame_before, ScoreboardFrame};
use mclip_scoring::{state_before_point, MatchScorer};

fn names() -> PlayerNames {
    PlayerNames::new("Becker", "Edberg")
}

fn scored_match(winners: &[PlayerNum]) -> MatchScorer {
    let mut scorer = MatchScorer::new();
    scorer.configure(MatchType::Match, 7, false).unwrap();
    scorer.set_first_server(PlayerNum::One).unwrap();
    for (i, &winner) in winners.iter().enumerate() {
        let start = i as f64 * 10.0;
        scorer.start_point(start).unwrap();
        scorer.record_point_winner(winner, start + 5.0).unwrap();
    }
    scorer
}

#[test]
fn test_before_point_is_after_previous_point() {
    let winners: Vec<PlayerNum> = (0..40)
        .map(|i| if i % 4 == 0 { PlayerNum::Two } else { PlayerNum::One })
        .collect();
    let scorer = scored_match(&winners);
    let points = scorer.points();
    let config = scorer.config().unwrap();

    for index in 1..points.len() {
        let before = frame_before(points, config, &names(), index).unwrap();
        let after_previous = frame_after(points, config, &names(), index - 1).unwrap();
        assert_eq!(before, after_previous, "boundary mismatch at point {}", index);
    }
}

#[test]
fn test_before_first_point_is_zero_state() {
    let scorer = scored_match(&[PlayerNum::One; 6]);
    let frame = frame_before(scorer.points(), scorer.config().unwrap(), &names(), 0).unwrap();
    assert_eq!(frame.player1.games, 0);
    assert_eq!(frame.player1.points, "0");
    assert_eq!(frame.player2.points, "0");
    assert!(frame.player1.serving);
}

#[test]
fn test_stored_snapshots_agree_with_replay_fallback() {
    let winners: Vec<PlayerNum> = (0..60)
        .map(|i| if i % 3 == 0 { PlayerNum::Two } else { PlayerNum::One })
        .collect();
    let scorer = scored_match(&winners);
    let config = scorer.config().unwrap();

    // Strip the stored snapshots so frame_before must replay
    let mut stripped = scorer.points().to_vec();
    for point in &mut stripped {
        point.score_state = None;
    }

    for index in 0..=stripped.len() {
        let from_snapshot = frame_before(scorer.points(), config, &names(), index).unwrap();
        let from_replay = frame_before(&stripped, config, &names(), index).unwrap();
        assert_eq!(from_snapshot, from_replay, "divergence at point {}", index);
    }
}

#[test]
fn test_frame_matches_replayed_state() {
    let winners: Vec<PlayerNum> = (0..25)
        .map(|i| if i % 2 == 0 { PlayerNum::One } else { PlayerNum::Two })
        .collect();
    let scorer = scored_match(&winners);
    let config = scorer.config().unwrap();

    let state = state_before_point(scorer.points(), config, 10).unwrap();
    let expected = ScoreboardFrame::from_state(&state, &names());
    let actual = frame_before(scorer.points(), config, &names(), 10).unwrap();
    assert_eq!(actual, expected);
}
