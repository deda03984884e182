pub mod feed;
pub mod match_state;
pub mod meta;
pub mod player;
pub mod point;
pub mod statistics;

pub use feed::MatchUpdate;
pub use match_state::{BestOf, GameState, MatchState, SetState};
pub use meta::{MatchKind, MatchMeta, Surface, Tournament, TournamentCategory};
pub use player::{PlayerId, PlayerState};
pub use point::{CourtPoint, PointType, PointVisualization};
pub use statistics::{StatBucket, Statistics};
