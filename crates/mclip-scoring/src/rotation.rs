//! Server-rotation calculator.
//!
//! Computes whose turn it is to serve from the totals already on the
//! scoreboard, so rotation is derived state rather than something the
//! scorer tracks by hand. Regular games alternate on total-games parity;
//! tiebreaks rotate on the 1-then-every-2 pattern, which wraps back to
//! the opening server every 4 points.

use mclip_models::{MatchConfig, MatchType, Player, PlayerNum};

use crate::error::{ScoringError, ScoringResult};

/// Compute the player who serves the next point.
///
/// `tiebreak_won` must be true only for the call made immediately after
/// a set tiebreak concluded: the finished tiebreak counts as one extra
/// "game" for rotation parity.
///
/// Fails with a configuration error if no first server has been chosen.
pub fn calculate_server(
    config: &MatchConfig,
    player1: &Player,
    player2: &Player,
    tiebreak_won: bool,
) -> ScoringResult<PlayerNum> {
    let first_server = config.first_server.ok_or(ScoringError::FirstServerNotSet)?;
    let second_server = first_server.opponent();

    match config.kind {
        MatchType::Tiebreak => {
            let total_points = player1.current_game + player2.current_game;
            Ok(tiebreak_server(total_points, first_server, second_server))
        }
        MatchType::Match => {
            let total_games = player1.total_games_won() + player2.total_games_won();
            if config.in_tiebreak && !tiebreak_won {
                // Whoever would have served the next game opens the tiebreak
                let (tiebreak_first, tiebreak_second) = if total_games % 2 == 0 {
                    (first_server, second_server)
                } else {
                    (second_server, first_server)
                };
                let total_points = player1.current_game + player2.current_game;
                Ok(tiebreak_server(total_points, tiebreak_first, tiebreak_second))
            } else {
                let parity = total_games + u32::from(tiebreak_won);
                Ok(if parity % 2 == 0 {
                    first_server
                } else {
                    second_server
                })
            }
        }
    }
}

/// The 1-then-every-2 rotation: the opening server keeps serve when
/// `total_points % 4` is 0 or 3.
fn tiebreak_server(total_points: u32, opening: PlayerNum, other: PlayerNum) -> PlayerNum {
    if matches!(total_points % 4, 0 | 3) {
        opening
    } else {
        other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mclip_models::SetResult;

    fn players() -> (Player, Player) {
        (Player::new("P1"), Player::new("P2"))
    }

    fn config_with_server(kind: MatchType) -> MatchConfig {
        MatchConfig {
            kind,
            first_server: Some(PlayerNum::One),
            ..Default::default()
        }
    }

    #[test]
    fn test_requires_first_server() {
        let (p1, p2) = players();
        let config = MatchConfig::standard();
        assert_eq!(
            calculate_server(&config, &p1, &p2, false),
            Err(ScoringError::FirstServerNotSet)
        );
    }

    #[test]
    fn test_standalone_tiebreak_parity_sequence() {
        let config = config_with_server(MatchType::Tiebreak);
        let mut expected = Vec::new();
        let mut actual = Vec::new();
        // Serve by total points played: 1,2,2,1,1,2,2,1,...
        for total in 0..8u32 {
            let (mut p1, mut p2) = players();
            p1.current_game = total; // distribution across players is irrelevant
            p2.current_game = 0;
            actual.push(calculate_server(&config, &p1, &p2, false).unwrap());
            expected.push(match total % 4 {
                0 | 3 => PlayerNum::One,
                _ => PlayerNum::Two,
            });
        }
        assert_eq!(actual, expected);
        assert_eq!(
            actual,
            vec![
                PlayerNum::One,
                PlayerNum::Two,
                PlayerNum::Two,
                PlayerNum::One,
                PlayerNum::One,
                PlayerNum::Two,
                PlayerNum::Two,
                PlayerNum::One,
            ]
        );
    }

    #[test]
    fn test_regular_rotation_alternates_on_games() {
        let config = config_with_server(MatchType::Match);
        let (mut p1, mut p2) = players();
        assert_eq!(
            calculate_server(&config, &p1, &p2, false).unwrap(),
            PlayerNum::One
        );
        p1.current_set = 1;
        assert_eq!(
            calculate_server(&config, &p1, &p2, false).unwrap(),
            PlayerNum::Two
        );
        p2.current_set = 1;
        assert_eq!(
            calculate_server(&config, &p1, &p2, false).unwrap(),
            PlayerNum::One
        );
    }

    #[test]
    fn test_rotation_counts_completed_sets() {
        let config = config_with_server(MatchType::Match);
        let (mut p1, mut p2) = players();
        // 6-4 first set: ten games played, parity even again
        p1.completed_sets.push(SetResult::games(6, true));
        p2.completed_sets.push(SetResult::games(4, false));
        assert_eq!(
            calculate_server(&config, &p1, &p2, false).unwrap(),
            PlayerNum::One
        );
        // 6-3: nine games, odd parity
        let (mut p1, mut p2) = players();
        p1.completed_sets.push(SetResult::games(6, true));
        p2.completed_sets.push(SetResult::games(3, false));
        assert_eq!(
            calculate_server(&config, &p1, &p2, false).unwrap(),
            PlayerNum::Two
        );
    }

    #[test]
    fn test_match_tiebreak_opening_server_from_games_parity() {
        let mut config = config_with_server(MatchType::Match);
        config.in_tiebreak = true;
        let (mut p1, mut p2) = players();
        // 6-6, no prior sets: 12 games, even parity, player 1 opens
        p1.current_set = 6;
        p2.current_set = 6;
        assert_eq!(
            calculate_server(&config, &p1, &p2, false).unwrap(),
            PlayerNum::One
        );
        // After one tiebreak point the serve passes to player 2
        p1.current_game = 1;
        assert_eq!(
            calculate_server(&config, &p1, &p2, false).unwrap(),
            PlayerNum::Two
        );
    }

    #[test]
    fn test_match_tiebreak_odd_games_parity_flips_opening_server() {
        let mut config = config_with_server(MatchType::Match);
        config.in_tiebreak = true;
        let (mut p1, mut p2) = players();
        // 6-3 first set then 6-6: 21 games, odd parity, player 2 opens
        p1.completed_sets.push(SetResult::games(6, true));
        p2.completed_sets.push(SetResult::games(3, false));
        p1.current_set = 6;
        p2.current_set = 6;
        assert_eq!(
            calculate_server(&config, &p1, &p2, false).unwrap(),
            PlayerNum::Two
        );
    }

    #[test]
    fn test_concluded_tiebreak_counts_as_one_game() {
        // After a 6-4 set and a 7-6 tiebreak set the totals are 23 games;
        // the finished tiebreak adds one, landing back on the first server.
        let config = config_with_server(MatchType::Match);
        let (mut p1, mut p2) = players();
        p1.completed_sets.push(SetResult::games(6, true));
        p2.completed_sets.push(SetResult::games(4, false));
        p1.completed_sets.push(SetResult::tiebreak(7, 3, true));
        p2.completed_sets.push(SetResult::tiebreak(6, 7, false));
        assert_eq!(
            calculate_server(&config, &p1, &p2, true).unwrap(),
            PlayerNum::One
        );
        assert_eq!(
            calculate_server(&config, &p1, &p2, false).unwrap(),
            PlayerNum::Two
        );
    }
}
