//! Live scoring state machine.
//!
//! `MatchScorer` is driven by UI gestures: configure the match, pick the
//! first server, start a point when the rally begins on the video, and
//! record the winner when it ends. Every completed point is appended to
//! the point log with its score snapshot and divider, so the log alone
//! can rebuild the scorer (see [`crate::replay`]).
//!
//! The original web app silently ignored invalid gestures; here they
//! surface as typed [`ScoringError`]s so callers and tests can tell the
//! cases apart. Callers wanting the forgiving behavior can drop the
//! `Result`.

use tracing::{debug, info};

use mclip_models::{
    MatchConfig, MatchRecord, MatchType, Player, PlayerNames, PlayerNum, Point, ScoreSnapshot,
};
use validator::Validate;

use crate::error::{ScoringError, ScoringResult};
use crate::replay;
use crate::transition::{apply_point, ScoreState};

/// Lifecycle phase of the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// No match configuration yet
    NotConfigured,
    /// Configured and ready for the next point
    AwaitingPoint,
    /// A point has started and awaits its winner
    InPoint,
    /// The contest is decided (tiebreak-only mode)
    MatchComplete,
}

/// Stateful controller for live scoring against the video timeline.
#[derive(Debug, Clone, Default)]
pub struct MatchScorer {
    state: Option<ScoreState>,
    points: Vec<Point>,
    pending_start: Option<f64>,
}

impl MatchScorer {
    /// New, unconfigured scorer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the match. Rejected once scoring has started.
    pub fn configure(&mut self, kind: MatchType, tiebreak_points: u32, no_ad: bool) -> ScoringResult<()> {
        if self.scoring_started() {
            return Err(ScoringError::config(
                "match configuration is locked once scoring has started",
            ));
        }
        if !MatchConfig::is_valid_tiebreak_points(tiebreak_points) {
            return Err(ScoringError::config(format!(
                "tiebreak must be played to 7 or 10 points, got {}",
                tiebreak_points
            )));
        }

        // Keep names and first server across a pre-match reconfigure
        let previous = self.state.take();
        let config = MatchConfig {
            kind,
            tiebreak_points,
            no_ad,
            in_tiebreak: false,
            first_server: previous.as_ref().and_then(|s| s.config.first_server),
        };
        let mut state = ScoreState::new(config);
        if let Some(previous) = previous {
            state.player1.name = previous.player1.name;
            state.player2.name = previous.player2.name;
        }
        debug!(kind = %kind, tiebreak_points, no_ad, "Match configured");
        self.state = Some(state);
        Ok(())
    }

    /// Set player display names. Allowed at any time after configuration.
    pub fn set_player_names(&mut self, names: &PlayerNames) -> ScoringResult<()> {
        names
            .validate()
            .map_err(|e| ScoringError::config(e.to_string()))?;
        let state = self.state.as_mut().ok_or(ScoringError::NotConfigured)?;
        state.player1.name = names.player1.clone();
        state.player2.name = names.player2.clone();
        Ok(())
    }

    /// Choose the first server. Allowed only before the first recorded
    /// point.
    pub fn set_first_server(&mut self, server: PlayerNum) -> ScoringResult<()> {
        if self.scoring_started() {
            return Err(ScoringError::config(
                "first server is locked once scoring has started",
            ));
        }
        let state = self.state.as_mut().ok_or(ScoringError::NotConfigured)?;
        state.config.first_server = Some(server);
        state.set_server(server);
        debug!(server = %server, "First server selected");
        Ok(())
    }

    /// Start a point at the given video time.
    pub fn start_point(&mut self, time: f64) -> ScoringResult<()> {
        let state = self.state.as_ref().ok_or(ScoringError::NotConfigured)?;
        if !time.is_finite() || time < 0.0 {
            return Err(ScoringError::InvalidTime(time));
        }
        if let Some(start) = self.pending_start {
            return Err(ScoringError::PointInProgress(start));
        }
        if state.server().is_none() {
            return Err(ScoringError::FirstServerNotSet);
        }
        if let Some(index) = self.points.iter().position(|p| p.contains(time)) {
            return Err(ScoringError::InsideRecordedPoint { time, index });
        }
        // The log stays chronological: new points start after the last one
        if let Some(last_end) = self.points.last().and_then(|p| p.end_time) {
            if time <= last_end {
                return Err(ScoringError::BeforePreviousPoint { time });
            }
        }
        self.pending_start = Some(time);
        debug!(time, "Point started");
        Ok(())
    }

    /// Record the winner of the in-progress point at the given video
    /// time, applying the scoring rules and appending to the point log.
    pub fn record_point_winner(&mut self, winner: PlayerNum, time: f64) -> ScoringResult<Point> {
        let state = self.state.as_ref().ok_or(ScoringError::NotConfigured)?;
        let start = self.pending_start.ok_or(ScoringError::NoPointInProgress)?;
        if !time.is_finite() {
            return Err(ScoringError::InvalidTime(time));
        }
        if time <= start {
            return Err(ScoringError::EndNotAfterStart { start, end: time });
        }
        if let Some(index) = self.points.iter().position(|p| p.overlaps(start, time)) {
            return Err(ScoringError::OverlapsRecordedPoint {
                start,
                end: time,
                index,
            });
        }

        let applied = apply_point(state, winner)?;
        let divider = applied.boundary.and_then(|b| b.divider());
        let mut point = Point::recorded(start, time, winner);
        point.score_state = Some(applied.state.snapshot());
        point.divider = divider;

        info!(
            winner = %winner,
            start,
            end = time,
            divider = divider.map(|d| d.as_str()).unwrap_or("none"),
            "Point recorded"
        );

        self.state = Some(applied.state);
        self.pending_start = None;
        self.points.push(point.clone());
        Ok(point)
    }

    /// Abandon the in-progress point, returning its start time.
    pub fn cancel_point(&mut self) -> Option<f64> {
        let start = self.pending_start.take();
        if let Some(start) = start {
            debug!(start, "Point abandoned");
        }
        start
    }

    /// Reset everything back to the initial unconfigured state.
    pub fn reset(&mut self) {
        info!("Scorer reset");
        *self = Self::default();
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> MatchPhase {
        let Some(state) = &self.state else {
            return MatchPhase::NotConfigured;
        };
        if self.pending_start.is_some() {
            return MatchPhase::InPoint;
        }
        // A decided tiebreak-only contest has a first server but nobody
        // left to serve
        if state.config.first_server.is_some() && state.server().is_none() {
            return MatchPhase::MatchComplete;
        }
        MatchPhase::AwaitingPoint
    }

    /// Whether any point has been recorded.
    pub fn scoring_started(&self) -> bool {
        !self.points.is_empty()
    }

    pub fn config(&self) -> Option<&MatchConfig> {
        self.state.as_ref().map(|s| &s.config)
    }

    pub fn player(&self, num: PlayerNum) -> Option<&Player> {
        self.state.as_ref().map(|s| s.player(num))
    }

    /// Both players, if configured.
    pub fn players(&self) -> Option<(&Player, &Player)> {
        self.state.as_ref().map(|s| (&s.player1, &s.player2))
    }

    /// The player serving the next point.
    pub fn server(&self) -> Option<PlayerNum> {
        self.state.as_ref().and_then(|s| s.server())
    }

    /// The chronological point log.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Start time of the in-progress point, if any.
    pub fn pending_start(&self) -> Option<f64> {
        self.pending_start
    }

    /// Snapshot of the current score state.
    pub fn snapshot(&self) -> Option<ScoreSnapshot> {
        self.state.as_ref().map(|s| s.snapshot())
    }

    /// Full scoring state, if configured.
    pub fn score_state(&self) -> Option<&ScoreState> {
        self.state.as_ref()
    }

    /// Export the persisted record shape (in-progress points are not
    /// persisted).
    pub fn to_record(&self) -> MatchRecord {
        let names = self.state.as_ref().and_then(|s| {
            if s.player1.name.is_empty() && s.player2.name.is_empty() {
                None
            } else {
                Some(PlayerNames::new(s.player1.name.clone(), s.player2.name.clone()))
            }
        });
        MatchRecord::new(
            self.points.clone(),
            self.state.as_ref().map(|s| s.config.clone()),
            names,
        )
    }

    /// Rebuild a scorer from a persisted record by replaying its point
    /// log. A record without a configuration yields an unconfigured
    /// scorer.
    pub fn from_record(record: &MatchRecord) -> ScoringResult<Self> {
        let Some(config) = &record.match_config else {
            return Ok(Self::default());
        };
        // Replay reconstructs from the start of the match; the stored
        // config carries the end-of-log tiebreak flag
        let mut state = replay::recalculate_score(&record.points, config)?;
        if let Some(names) = &record.player_names {
            state.player1.name = names.player1.clone();
            state.player2.name = names.player2.clone();
        }
        Ok(Self {
            state: Some(state),
            points: record.points.clone(),
            pending_start: None,
        })
    }
}
