//! Tennis match scoring for the MatchClip backend.
//!
//! This crate provides:
//! - Pure game/set/tiebreak scoring primitives
//! - The server-rotation calculator
//! - The live scoring state machine driven by UI gestures
//! - The point-log replay engine that reconstructs state at any point
//!
//! Live scoring and replay share one pure transition function
//! ([`transition::apply_point`]), so a point log replayed from storage
//! reproduces exactly the state the live scorer held when it was written.
//! The clip export renderer depends on that equivalence: any divergence
//! shows a wrong scoreboard on exported video.

pub mod error;
pub mod game;
pub mod machine;
pub mod replay;
pub mod rotation;
pub mod transition;

// Re-export common types
pub use error::{ScoringError, ScoringResult};
pub use machine::{MatchPhase, MatchScorer};
pub use replay::{
    recalculate_score, replay_timeline, state_after_point, state_before_point, verify_log,
    ReplayedPoint,
};
pub use rotation::calculate_server;
pub use transition::{apply_point, AppliedPoint, Boundary, ScoreState};
