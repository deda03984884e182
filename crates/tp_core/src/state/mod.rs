//! Match session: the single owner of the canonical match state.
//!
//! The engine itself is a pure transition; this container holds the state
//! between points, drives the engine with a session-owned seeded RNG, and
//! maintains the caller-owned textual update feed. There is no global: the
//! hosting layer constructs a session and passes it to whatever needs read
//! or update access.

use chrono::Local;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::data;
use crate::engine;
use crate::models::{MatchState, MatchUpdate, PlayerId, PointType};

/// Informational ticks trim the feed to this many entries.
const FEED_CAPACITY: usize = 20;

/// Owner of one match's canonical state and update feed.
pub struct MatchSession {
    state: MatchState,
    updates: Vec<MatchUpdate>,
    live: bool,
    rng: ChaCha8Rng,
}

impl MatchSession {
    pub fn new(state: MatchState, seed: u64) -> Self {
        Self { state, updates: Vec::new(), live: true, rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Session over the embedded demo fixture.
    pub fn sample(seed: u64) -> Self {
        Self::new(data::sample_match(), seed)
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Newest-first update feed.
    pub fn updates(&self) -> &[MatchUpdate] {
        &self.updates
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    pub fn set_live(&mut self, live: bool) {
        self.live = live;
    }

    /// Apply one point outcome and record a feed entry for it.
    ///
    /// Ignored once the match is complete; the completed state is returned
    /// unchanged.
    pub fn apply_point(&mut self, player: PlayerId, point_type: PointType) -> &MatchState {
        if self.state.is_complete {
            log::debug!("ignoring point after match completion");
            return &self.state;
        }

        let next = engine::apply_point(&self.state, player, point_type, &mut self.rng);

        let content = format!(
            "{} scores a {}!",
            self.state.player(player).name,
            point_type.label()
        );
        let important = matches!(point_type, PointType::Ace | PointType::Winner);
        self.updates.insert(0, MatchUpdate::point(timestamp(), content, point_type, important));

        self.state = next;
        &self.state
    }

    /// Periodic refresh from the hosting layer's timer.
    ///
    /// Prepends an informational entry and trims the feed; never advances
    /// the score. Ignored while the session is not live.
    pub fn tick(&mut self) {
        if !self.live {
            return;
        }
        self.updates.insert(0, MatchUpdate::info(timestamp(), "Match progress update..."));
        self.updates.truncate(FEED_CAPACITY);
    }
}

fn timestamp() -> String {
    Local::now().format("%-I:%M:%S %p").to_string()
}
