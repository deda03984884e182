use serde::{Deserialize, Serialize};

use super::statistics::Statistics;

/// One of the two singles players in a match.
///
/// The engine identifies players positionally; the richer roster identity
/// (name, ranking, country) lives on [`PlayerState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlayerId {
    Player1,
    Player2,
}

impl PlayerId {
    /// The other player.
    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::Player1 => PlayerId::Player2,
            PlayerId::Player2 => PlayerId::Player1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlayerId::Player1 => "player1",
            PlayerId::Player2 => "player2",
        }
    }
}

/// Per-player match state: roster profile, serving flag, sets won and
/// accumulated statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    /// Roster identifier (e.g. "player-001").
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub ranking: u32,
    #[serde(default)]
    pub seed: u32,
    #[serde(default)]
    pub age: u32,
    /// Handedness label, e.g. "Right-handed".
    #[serde(default)]
    pub plays: String,
    pub is_serving: bool,
    pub sets_won: u32,
    #[serde(default)]
    pub statistics: Statistics,
}

impl PlayerState {
    /// Create a player with an empty statistics sheet.
    pub fn new(id: impl Into<String>, name: impl Into<String>, is_serving: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            country: String::new(),
            country_code: String::new(),
            ranking: 0,
            seed: 0,
            age: 0,
            plays: String::new(),
            is_serving,
            sets_won: 0,
            statistics: Statistics::default(),
        }
    }
}
