//! # tp_core - Deterministic Tennis Match Scoring Engine
//!
//! This library provides the scoring engine behind a tennis-match viewing
//! interface: a pure state-transition function from `(match state, scoring
//! player, point category)` to the next consistent match state.
//!
//! ## Features
//! - Standard no-tie-break scoring: deuce/advantage, 6-with-margin-2 sets,
//!   best-of-3/5 match completion
//! - Per-player overall and per-set statistics
//! - Synthetic rally trajectories for court visualization
//! - 100% deterministic under an injected seed (same seed = same result)
//! - JSON API for easy integration with non-Rust hosts

pub mod api;
pub mod data;
pub mod engine;
pub mod error;
pub mod models;
pub mod state;

// Re-export main API functions
pub use api::{apply_point_json, sample_match_json, PointRequest, PointResponse};
pub use engine::apply_point;
pub use error::{MatchError, Result};

// Re-export the model layer
pub use models::{
    BestOf, CourtPoint, GameState, MatchKind, MatchMeta, MatchState, MatchUpdate, PlayerId,
    PlayerState, PointType, PointVisualization, SetState, StatBucket, Statistics, Surface,
    Tournament, TournamentCategory,
};

// Re-export state management
pub use state::MatchSession;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
