use serde::{Deserialize, Serialize};

/// Match discipline. Doubles is carried for data fidelity only; the engine
/// scores two identities regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchKind {
    Singles,
    Doubles,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Surface {
    Hard,
    Clay,
    Grass,
    Carpet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TournamentCategory {
    GrandSlam,
    Atp1000,
    Atp500,
    Atp250,
    Wta1000,
    Wta500,
    Wta250,
    Exhibition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub location: String,
    pub category: TournamentCategory,
}

/// Descriptive match metadata. Inert to the scoring transition; copied
/// through unchanged on every point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchMeta {
    pub id: String,
    pub kind: MatchKind,
    pub surface: Surface,
    pub tournament: Tournament,
    #[serde(default)]
    pub round: String,
    #[serde(default)]
    pub court: String,
}

impl MatchMeta {
    /// Minimal metadata for ad-hoc matches (CLI simulations, tests).
    pub fn exhibition(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: MatchKind::Singles,
            surface: Surface::Hard,
            tournament: Tournament {
                id: "tournament-000".to_string(),
                name: "Exhibition".to_string(),
                location: String::new(),
                category: TournamentCategory::Exhibition,
            },
            round: String::new(),
            court: String::new(),
        }
    }
}
