//! Shared data models for the MatchClip backend.
//!
//! This crate provides Serde-serializable types for:
//! - Players, set results, and match configuration
//! - Points on the video timeline and their score snapshots
//! - The persisted match record (point log + config + names)
//!
//! Persisted JSON keeps the camelCase field names of the original
//! web-app store so existing match logs load unchanged.

pub mod config;
pub mod names;
pub mod player;
pub mod point;
pub mod record;

// Re-export common types
pub use config::{MatchConfig, MatchType};
pub use names::PlayerNames;
pub use player::{Player, PlayerNum, SetResult};
pub use point::{Divider, Point, ScoreSnapshot};
pub use record::{MatchId, MatchRecord};
