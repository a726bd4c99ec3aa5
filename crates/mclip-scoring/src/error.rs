//! Scoring error types.

use thiserror::Error;

/// Result type for scoring operations.
pub type ScoringResult<T> = Result<T, ScoringError>;

/// Errors that can occur while scoring or replaying a match.
///
/// All variants are recoverable: the caller surfaces them and retries.
/// Configuration errors reject an operation before any state mutates;
/// temporal errors reject a point whose timeline placement is invalid;
/// replay errors name the offending point index in the log.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    #[error("Match is not configured")]
    NotConfigured,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("First server has not been selected")]
    FirstServerNotSet,

    #[error("No point is in progress")]
    NoPointInProgress,

    #[error("A point is already in progress (started at {0:.3}s)")]
    PointInProgress(f64),

    #[error("Invalid video time: {0}")]
    InvalidTime(f64),

    #[error("Point end time {end:.3}s is not after start time {start:.3}s")]
    EndNotAfterStart { start: f64, end: f64 },

    #[error("Time {time:.3}s falls inside recorded point {index}")]
    InsideRecordedPoint { time: f64, index: usize },

    #[error("Time {time:.3}s is not after the end of the last recorded point")]
    BeforePreviousPoint { time: f64 },

    #[error("Interval [{start:.3}s, {end:.3}s] overlaps recorded point {index}")]
    OverlapsRecordedPoint { start: f64, end: f64, index: usize },

    #[error("Point {index} is invalid: {reason}")]
    InvalidPoint { index: usize, reason: String },

    #[error("Replay diverged from stored score state at point {index}")]
    Divergence { index: usize },
}

impl ScoringError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn invalid_point(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidPoint {
            index,
            reason: reason.into(),
        }
    }

    /// Check if the error is a configuration error.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            ScoringError::NotConfigured
                | ScoringError::Config(_)
                | ScoringError::FirstServerNotSet
        )
    }

    /// Check if the error is a temporal (timeline placement) error.
    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            ScoringError::InvalidTime(_)
                | ScoringError::EndNotAfterStart { .. }
                | ScoringError::InsideRecordedPoint { .. }
                | ScoringError::BeforePreviousPoint { .. }
                | ScoringError::OverlapsRecordedPoint { .. }
        )
    }

    /// Check if the error came from replaying a stored point log.
    pub fn is_replay(&self) -> bool {
        matches!(
            self,
            ScoringError::InvalidPoint { .. } | ScoringError::Divergence { .. }
        )
    }
}
