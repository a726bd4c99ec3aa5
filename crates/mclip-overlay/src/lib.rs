//! Scoreboard overlay model for the MatchClip backend.
//!
//! The clip export renderer burns a scoreboard into outgoing video. This
//! crate shapes replayed score state into the exact rows and strings the
//! renderer draws: set cells with tiebreak superscripts, current games,
//! display game points ("15", "40", "Ad", blank against advantage), and
//! the serve marker.
//!
//! The renderer asks for the state *before* or *after* a given point;
//! [`frame_before`]/[`frame_after`] implement that boundary, preferring
//! the point log's stored snapshots and falling back to replay.

pub mod caption;
pub mod scoreboard;

pub use caption::{point_caption, score_line};
pub use scoreboard::{frame_after, frame_before, ScoreboardFrame, ScoreboardRow, SetCell};
