//! Pure game, set, and tiebreak scoring arithmetic.
//!
//! These functions encode the rules of tennis scoring over the 0-4
//! game-point encoding (0=love, 1=15, 2=30, 3=40, 4=advantage). They
//! have no state and no dependencies; the transition layer applies them
//! to player state.

/// Game-point value for 40 (deuce when both players hold it).
pub const DEUCE_POINT: u32 = 3;
/// Game-point value for advantage.
pub const ADVANTAGE: u32 = 4;

/// Display string for a game score, given the opponent's score.
///
/// Returns `""` when the opponent holds advantage: the original
/// scoreboard leaves this player's cell blank to signal opponent-ad, and
/// downstream renderers rely on that.
pub fn format_game_score(score: u32, other_score: u32) -> &'static str {
    if other_score == ADVANTAGE {
        return "";
    }
    match score {
        0 => "0",
        1 => "15",
        2 => "30",
        3 => "40",
        4 => "Ad",
        _ => "",
    }
}

/// Whether a tiebreak is won at the given score.
///
/// First to `target_points` (7 or 10), win by two. Applies uniformly to
/// set tiebreaks and tiebreak-only matches.
pub fn is_tiebreak_won(winning_score: u32, losing_score: u32, target_points: u32) -> bool {
    winning_score >= target_points && winning_score - losing_score >= 2
}

/// Whether the serve changes hands after `total_points` have been played
/// in a tiebreak.
///
/// The serve changes after the first point, then after every two points.
pub fn should_change_server(total_points: u32) -> bool {
    total_points == 1 || (total_points > 1 && total_points % 2 == 1)
}

/// What a regular-game point did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePointOutcome {
    /// Game continues with updated point counts
    Scored { winner: u32, loser: u32 },
    /// The point winner took the game
    GameWon,
}

/// Apply one point to a regular (non-tiebreak) game.
///
/// `winner` and `loser` are the current 0-4 encoded game points of the
/// point winner and loser.
pub fn apply_game_point(winner: u32, loser: u32, no_ad: bool) -> GamePointOutcome {
    if winner == DEUCE_POINT && loser == DEUCE_POINT {
        if no_ad {
            // Deciding point: deuce is game point for whoever takes it
            GamePointOutcome::GameWon
        } else {
            GamePointOutcome::Scored {
                winner: ADVANTAGE,
                loser: DEUCE_POINT,
            }
        }
    } else if winner == ADVANTAGE {
        GamePointOutcome::GameWon
    } else if loser == ADVANTAGE {
        // Winner broke the opponent's advantage, back to deuce
        GamePointOutcome::Scored {
            winner: DEUCE_POINT,
            loser: DEUCE_POINT,
        }
    } else if winner < DEUCE_POINT {
        GamePointOutcome::Scored {
            winner: winner + 1,
            loser,
        }
    } else {
        // Winner at 40, loser below 40
        GamePointOutcome::GameWon
    }
}

/// What winning a game did to the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    /// Set continues; the game winner's count becomes `winner_games`
    InProgress { winner_games: u32 },
    /// Set decided at `winner_games`-`loser_games`
    SetWon { winner_games: u32, loser_games: u32 },
    /// 6-6 reached; a tiebreak decides the set
    TiebreakStarted,
}

/// Resolve a game win against the set score.
///
/// `winner_games` is the game winner's set count before this game,
/// `loser_games` the opponent's.
pub fn apply_game_win(winner_games: u32, loser_games: u32) -> SetOutcome {
    let n = winner_games + 1;
    let m = loser_games;
    if n == 6 && m <= 4 {
        SetOutcome::SetWon {
            winner_games: n,
            loser_games: m,
        }
    } else if n == 7 && m == 5 {
        SetOutcome::SetWon {
            winner_games: n,
            loser_games: m,
        }
    } else if n == 6 && m == 6 {
        SetOutcome::TiebreakStarted
    } else {
        SetOutcome::InProgress { winner_games: n }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_game_score_table() {
        assert_eq!(format_game_score(0, 0), "0");
        assert_eq!(format_game_score(1, 2), "15");
        assert_eq!(format_game_score(2, 3), "30");
        assert_eq!(format_game_score(3, 3), "40");
        assert_eq!(format_game_score(4, 3), "Ad");
    }

    #[test]
    fn test_format_game_score_blank_against_advantage() {
        assert_eq!(format_game_score(3, 4), "");
        assert_eq!(format_game_score(0, 4), "");
    }

    #[test]
    fn test_tiebreak_won_requires_margin() {
        assert!(is_tiebreak_won(7, 5, 7));
        assert!(is_tiebreak_won(7, 0, 7));
        assert!(!is_tiebreak_won(7, 6, 7));
        assert!(is_tiebreak_won(8, 6, 7));
        assert!(!is_tiebreak_won(6, 4, 7));
        assert!(is_tiebreak_won(10, 8, 10));
        assert!(!is_tiebreak_won(10, 9, 10));
    }

    #[test]
    fn test_should_change_server_pattern() {
        // Change after point 1, then after every 2 points
        let changes: Vec<bool> = (0..9).map(should_change_server).collect();
        assert_eq!(
            changes,
            vec![false, true, false, true, false, true, false, true, false]
        );
    }

    #[test]
    fn test_regular_point_increments_below_forty() {
        assert_eq!(
            apply_game_point(0, 0, false),
            GamePointOutcome::Scored { winner: 1, loser: 0 }
        );
        assert_eq!(
            apply_game_point(2, 1, false),
            GamePointOutcome::Scored { winner: 3, loser: 1 }
        );
    }

    #[test]
    fn test_forty_beats_lower_score() {
        assert_eq!(apply_game_point(3, 0, false), GamePointOutcome::GameWon);
        assert_eq!(apply_game_point(3, 2, false), GamePointOutcome::GameWon);
    }

    #[test]
    fn test_deuce_gives_advantage() {
        assert_eq!(
            apply_game_point(3, 3, false),
            GamePointOutcome::Scored { winner: 4, loser: 3 }
        );
    }

    #[test]
    fn test_no_ad_deuce_wins_game() {
        assert_eq!(apply_game_point(3, 3, true), GamePointOutcome::GameWon);
    }

    #[test]
    fn test_advantage_converts() {
        assert_eq!(apply_game_point(4, 3, false), GamePointOutcome::GameWon);
    }

    #[test]
    fn test_breaking_advantage_returns_to_deuce() {
        assert_eq!(
            apply_game_point(3, 4, false),
            GamePointOutcome::Scored { winner: 3, loser: 3 }
        );
    }

    #[test]
    fn test_set_won_at_six() {
        assert_eq!(
            apply_game_win(5, 4),
            SetOutcome::SetWon { winner_games: 6, loser_games: 4 }
        );
        assert_eq!(
            apply_game_win(5, 0),
            SetOutcome::SetWon { winner_games: 6, loser_games: 0 }
        );
    }

    #[test]
    fn test_set_won_seven_five() {
        assert_eq!(
            apply_game_win(6, 5),
            SetOutcome::SetWon { winner_games: 7, loser_games: 5 }
        );
    }

    #[test]
    fn test_six_five_continues() {
        assert_eq!(apply_game_win(5, 5), SetOutcome::InProgress { winner_games: 6 });
    }

    #[test]
    fn test_six_all_starts_tiebreak() {
        assert_eq!(apply_game_win(5, 6), SetOutcome::TiebreakStarted);
    }
}
