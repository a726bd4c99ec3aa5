//! The single pure point transition.
//!
//! [`apply_point`] maps (state, point winner) to the next state plus the
//! boundary the point crossed. Both the live scorer and the replay
//! engine go through this function, so live scoring and replayed
//! reconstruction cannot drift apart.

use mclip_models::{Divider, MatchConfig, MatchType, Player, PlayerNum, ScoreSnapshot, SetResult};

use crate::error::{ScoringError, ScoringResult};
use crate::game::{
    apply_game_point, apply_game_win, is_tiebreak_won, should_change_server, GamePointOutcome,
    SetOutcome,
};
use crate::rotation::calculate_server;

/// Complete scoring state of a match: both players plus configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreState {
    pub player1: Player,
    pub player2: Player,
    pub config: MatchConfig,
}

impl ScoreState {
    /// Zero-initialized state with serving taken from the config's
    /// first server.
    pub fn new(config: MatchConfig) -> Self {
        let mut state = Self {
            player1: Player::default(),
            player2: Player::default(),
            config,
        };
        if let Some(server) = state.config.first_server {
            state.set_server(server);
        }
        state
    }

    pub fn player(&self, num: PlayerNum) -> &Player {
        match num {
            PlayerNum::One => &self.player1,
            PlayerNum::Two => &self.player2,
        }
    }

    /// The player serving the next point, if serving state is live.
    pub fn server(&self) -> Option<PlayerNum> {
        match (self.player1.is_serving, self.player2.is_serving) {
            (true, false) => Some(PlayerNum::One),
            (false, true) => Some(PlayerNum::Two),
            _ => None,
        }
    }

    /// Snapshot of the current state for point annotation.
    pub fn snapshot(&self) -> ScoreSnapshot {
        ScoreSnapshot {
            player1: self.player1.clone(),
            player2: self.player2.clone(),
            in_tiebreak: self.config.in_tiebreak,
        }
    }

    pub(crate) fn set_server(&mut self, server: PlayerNum) {
        self.player1.is_serving = server == PlayerNum::One;
        self.player2.is_serving = server == PlayerNum::Two;
    }

    fn winner_loser_mut(&mut self, winner: PlayerNum) -> (&mut Player, &mut Player) {
        match winner {
            PlayerNum::One => (&mut self.player1, &mut self.player2),
            PlayerNum::Two => (&mut self.player2, &mut self.player1),
        }
    }
}

/// Boundary a point crossed, before filtering down to the recorded
/// divider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// A game concluded without deciding the set
    Game,
    /// A set concluded on games
    Set,
    /// A tiebreak concluded (deciding a set, or the whole contest in
    /// tiebreak-only mode)
    Tiebreak,
    /// The set reached 6-6 and a tiebreak begins
    TiebreakStart,
}

impl Boundary {
    /// The divider recorded on the point list. Plain game wins are not
    /// annotated.
    pub fn divider(&self) -> Option<Divider> {
        match self {
            Boundary::Game => None,
            Boundary::Set => Some(Divider::Set),
            Boundary::Tiebreak => Some(Divider::Tiebreak),
            Boundary::TiebreakStart => Some(Divider::TiebreakStart),
        }
    }
}

/// Result of applying one point.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedPoint {
    /// State after the point
    pub state: ScoreState,
    /// Boundary the point crossed, if any
    pub boundary: Option<Boundary>,
}

/// Apply one point to the given state.
///
/// Pure: the input state is untouched and the same inputs always produce
/// the same output. Fails if no first server has been chosen.
pub fn apply_point(state: &ScoreState, winner: PlayerNum) -> ScoringResult<AppliedPoint> {
    if state.config.first_server.is_none() {
        return Err(ScoringError::FirstServerNotSet);
    }

    let was_tiebreak = state.config.scores_as_tiebreak();
    let mut next = state.clone();
    let boundary = if was_tiebreak {
        apply_tiebreak_point(&mut next, winner)
    } else {
        apply_regular_point(&mut next, winner)
    };

    let standalone_decided =
        next.config.kind == MatchType::Tiebreak && boundary == Some(Boundary::Tiebreak);
    if standalone_decided {
        // The contest is over; nobody serves next
        next.player1.is_serving = false;
        next.player2.is_serving = false;
    } else {
        let tiebreak_won = boundary == Some(Boundary::Tiebreak);
        let server = calculate_server(&next.config, &next.player1, &next.player2, tiebreak_won)?;
        next.set_server(server);

        if was_tiebreak && boundary.is_none() {
            // The parity rule and the 1-then-every-2 pattern must agree
            let total_points = next.player1.current_game + next.player2.current_game;
            debug_assert_eq!(
                state.server() != next.server(),
                should_change_server(total_points),
            );
        }
    }

    Ok(AppliedPoint {
        state: next,
        boundary,
    })
}

/// Apply a point within a regular game.
fn apply_regular_point(state: &mut ScoreState, winner: PlayerNum) -> Option<Boundary> {
    let no_ad = state.config.no_ad;
    let (w, l) = state.winner_loser_mut(winner);

    match apply_game_point(w.current_game, l.current_game, no_ad) {
        GamePointOutcome::Scored { winner, loser } => {
            w.current_game = winner;
            l.current_game = loser;
            None
        }
        GamePointOutcome::GameWon => {
            w.current_game = 0;
            l.current_game = 0;
            match apply_game_win(w.current_set, l.current_set) {
                SetOutcome::InProgress { winner_games } => {
                    w.current_set = winner_games;
                    Some(Boundary::Game)
                }
                SetOutcome::SetWon {
                    winner_games,
                    loser_games,
                } => {
                    w.completed_sets.push(SetResult::games(winner_games, true));
                    l.completed_sets.push(SetResult::games(loser_games, false));
                    w.current_set = 0;
                    l.current_set = 0;
                    Some(Boundary::Set)
                }
                SetOutcome::TiebreakStarted => {
                    // Hold the set at 6-6; points now count in current_game
                    w.current_set = 6;
                    state.config.in_tiebreak = true;
                    Some(Boundary::TiebreakStart)
                }
            }
        }
    }
}

/// Apply a point within a tiebreak (set tiebreak or tiebreak-only match).
fn apply_tiebreak_point(state: &mut ScoreState, winner: PlayerNum) -> Option<Boundary> {
    let kind = state.config.kind;
    let target = state.config.tiebreak_points;
    let (w, l) = state.winner_loser_mut(winner);

    w.current_game += 1;
    if !is_tiebreak_won(w.current_game, l.current_game, target) {
        return None;
    }

    let winner_points = w.current_game;
    let loser_points = l.current_game;
    match kind {
        MatchType::Match => {
            // The set goes 7-6; each side records the opponent's tiebreak count
            w.completed_sets
                .push(SetResult::tiebreak(7, loser_points, true));
            l.completed_sets
                .push(SetResult::tiebreak(6, winner_points, false));
            state.config.in_tiebreak = false;
        }
        MatchType::Tiebreak => {
            w.completed_sets.push(SetResult::games(winner_points, true));
            l.completed_sets.push(SetResult::games(loser_points, false));
        }
    }
    let (w, l) = state.winner_loser_mut(winner);
    w.current_set = 0;
    l.current_set = 0;
    w.current_game = 0;
    l.current_game = 0;
    Some(Boundary::Tiebreak)
}
