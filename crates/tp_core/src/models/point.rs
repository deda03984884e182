use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Categorical outcome of a single point.
///
/// Only ace / winner / fault / doubleFault / unforcedError are special-cased
/// by the engine; every other value (including unknown strings arriving over
/// the JSON boundary) is treated as a generic point award.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PointType {
    Ace,
    Winner,
    UnforcedError,
    ForcedError,
    Fault,
    DoubleFault,
    Net,
    Let,
    /// Catch-all for point categories the engine does not model.
    #[serde(other)]
    Other,
}

impl PointType {
    /// Serve outcomes carry a cosmetic serve speed on the visualization.
    pub fn is_serve_outcome(self) -> bool {
        matches!(self, PointType::Ace | PointType::Fault | PointType::DoubleFault)
    }

    /// Wire spelling, also used in feed text.
    pub fn label(self) -> &'static str {
        match self {
            PointType::Ace => "ace",
            PointType::Winner => "winner",
            PointType::UnforcedError => "unforcedError",
            PointType::ForcedError => "forcedError",
            PointType::Fault => "fault",
            PointType::DoubleFault => "doubleFault",
            PointType::Net => "net",
            PointType::Let => "let",
            PointType::Other => "other",
        }
    }
}

/// Point on the court, normalized to the unit square.
///
/// Player 1's baseline sits near y=0.85, player 2's near y=0.15.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CourtPoint {
    pub x: f32,
    pub y: f32,
}

impl CourtPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Synthetic trajectory and player placement for the most recent point.
///
/// Fully overwritten on every point; never accumulated. `rally_length` is the
/// trajectory point count, not a semantic shot count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointVisualization {
    pub trajectory: Vec<CourtPoint>,
    pub player1_position: CourtPoint,
    pub player2_position: CourtPoint,
    pub rally_length: u32,
    pub point_winner: PlayerId,
    pub point_type: PointType,
    /// Serve speed in km/h; present only for serve outcomes.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub serve_speed: Option<u32>,
}
