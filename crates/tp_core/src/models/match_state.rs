use serde::{Deserialize, Serialize};

use super::meta::MatchMeta;
use super::player::{PlayerId, PlayerState};
use super::point::{CourtPoint, PointType, PointVisualization};

/// Match format: total number of sets. A player needs more than half of them
/// to win the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum BestOf {
    Three,
    Five,
}

impl BestOf {
    pub fn total_sets(self) -> u32 {
        match self {
            BestOf::Three => 3,
            BestOf::Five => 5,
        }
    }

    /// Sets required to win the match (`> total / 2`).
    pub fn sets_to_win(self) -> u32 {
        self.total_sets() / 2 + 1
    }
}

impl TryFrom<u8> for BestOf {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(BestOf::Three),
            5 => Ok(BestOf::Five),
            other => Err(format!("bestOf must be 3 or 5, got {}", other)),
        }
    }
}

impl From<BestOf> for u8 {
    fn from(value: BestOf) -> Self {
        value.total_sets() as u8
    }
}

/// Games won per player in one set.
///
/// Once `winner` is set the set is never mutated again; play continues in a
/// freshly appended set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetState {
    pub player1_score: u32,
    pub player2_score: u32,
    #[serde(default)]
    pub winner: Option<PlayerId>,
}

impl SetState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self, player: PlayerId) -> u32 {
        match player {
            PlayerId::Player1 => self.player1_score,
            PlayerId::Player2 => self.player2_score,
        }
    }

    pub fn score_mut(&mut self, player: PlayerId) -> &mut u32 {
        match player {
            PlayerId::Player1 => &mut self.player1_score,
            PlayerId::Player2 => &mut self.player2_score,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.winner.is_some()
    }
}

/// Point score of the game in progress.
///
/// Points run 0–3 in the regular phase ("Love", "15", "30", "40"); during
/// deuce both counters stay pinned at 3 and only `advantage` moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub number: u32,
    pub player1_points: u32,
    pub player2_points: u32,
    pub deuce: bool,
    #[serde(default)]
    pub advantage: Option<PlayerId>,
}

impl GameState {
    /// A fresh love-all game with the given sequence number.
    pub fn fresh(number: u32) -> Self {
        Self { number, player1_points: 0, player2_points: 0, deuce: false, advantage: None }
    }

    pub fn points(&self, player: PlayerId) -> u32 {
        match player {
            PlayerId::Player1 => self.player1_points,
            PlayerId::Player2 => self.player2_points,
        }
    }

    pub fn points_mut(&mut self, player: PlayerId) -> &mut u32 {
        match player {
            PlayerId::Player1 => &mut self.player1_points,
            PlayerId::Player2 => &mut self.player2_points,
        }
    }

    /// Announcer label for a raw point count: "Love", "15", "30", "40".
    pub fn point_label(points: u32) -> String {
        match points {
            0 => "Love".to_string(),
            1 => "15".to_string(),
            2 => "30".to_string(),
            3 => "40".to_string(),
            other => other.to_string(),
        }
    }

    /// Call strings for both players, handling deuce and advantage.
    pub fn score_display(&self) -> (String, String) {
        if self.deuce {
            match self.advantage {
                Some(PlayerId::Player1) => ("Ad".to_string(), "40".to_string()),
                Some(PlayerId::Player2) => ("40".to_string(), "Ad".to_string()),
                None => ("40".to_string(), "40".to_string()),
            }
        } else {
            (Self::point_label(self.player1_points), Self::point_label(self.player2_points))
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::fresh(1)
    }
}

/// Root aggregate: the complete state of one match between two players.
///
/// The engine treats a `MatchState` as an immutable snapshot and returns a
/// new value per point; the hosting session owns the canonical copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchState {
    pub meta: MatchMeta,
    pub best_of: BestOf,
    pub player1: PlayerState,
    pub player2: PlayerState,
    /// 1-based index of the set currently being played.
    pub current_set: u32,
    pub sets: Vec<SetState>,
    pub current_game: GameState,
    pub last_point: PointVisualization,
    #[serde(default)]
    pub winner: Option<PlayerId>,
    pub is_complete: bool,
}

impl MatchState {
    /// A fresh match at love-all in the first game of the first set.
    /// Player 1 serves first.
    pub fn new(meta: MatchMeta, best_of: BestOf, mut player1: PlayerState, mut player2: PlayerState) -> Self {
        player1.is_serving = true;
        player2.is_serving = false;
        Self {
            meta,
            best_of,
            player1,
            player2,
            current_set: 1,
            sets: vec![SetState::new()],
            current_game: GameState::fresh(1),
            last_point: PointVisualization {
                trajectory: Vec::new(),
                player1_position: CourtPoint::new(0.15, 0.5),
                player2_position: CourtPoint::new(0.85, 0.5),
                rally_length: 0,
                point_winner: PlayerId::Player1,
                point_type: PointType::Other,
                serve_speed: None,
            },
            winner: None,
            is_complete: false,
        }
    }

    pub fn player(&self, id: PlayerId) -> &PlayerState {
        match id {
            PlayerId::Player1 => &self.player1,
            PlayerId::Player2 => &self.player2,
        }
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut PlayerState {
        match id {
            PlayerId::Player1 => &mut self.player1,
            PlayerId::Player2 => &mut self.player2,
        }
    }

    /// 0-based index of the current set into `sets`.
    pub fn current_set_index(&self) -> usize {
        self.current_set.saturating_sub(1) as usize
    }

    /// Set-score summary like "6-4 4-6 2-3".
    pub fn scoreline(&self) -> String {
        self.sets
            .iter()
            .map(|set| format!("{}-{}", set.player1_score, set.player2_score))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
