//! Player display names.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::player::PlayerNum;

/// Display names for both players, as stored alongside the point log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlayerNames {
    /// Player 1 display name
    #[validate(length(min = 1, max = 64))]
    pub player1: String,

    /// Player 2 display name
    #[validate(length(min = 1, max = 64))]
    pub player2: String,
}

impl PlayerNames {
    pub fn new(player1: impl Into<String>, player2: impl Into<String>) -> Self {
        Self {
            player1: player1.into(),
            player2: player2.into(),
        }
    }

    /// Name for the given player.
    pub fn for_player(&self, player: PlayerNum) -> &str {
        match player {
            PlayerNum::One => &self.player1,
            PlayerNum::Two => &self.player2,
        }
    }
}
