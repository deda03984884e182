//! Versioned JSON façade over the typed engine.
//!
//! String-in/string-out so non-Rust hosts can drive the transition. The
//! request carries the full match snapshot plus a seed; the same request
//! string always produces the same response string.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::data;
use crate::engine;
use crate::error::{MatchError, Result};
use crate::models::{MatchState, PlayerId, PointType};
use crate::SCHEMA_VERSION;

#[derive(Debug, Deserialize)]
pub struct PointRequest {
    pub schema_version: u8,
    /// Seed for trajectory jitter and serve speed.
    pub seed: u64,
    #[serde(rename = "match")]
    pub match_state: MatchState,
    pub player: PlayerId,
    pub point_type: PointType,
}

#[derive(Debug, Serialize)]
pub struct PointResponse {
    pub schema_version: u8,
    #[serde(rename = "match")]
    pub match_state: MatchState,
}

/// Apply one point to a serialized match snapshot.
pub fn apply_point_json(request_json: &str) -> Result<String> {
    let request: PointRequest = serde_json::from_str(request_json)?;

    if request.schema_version != SCHEMA_VERSION {
        warn!(
            expected = SCHEMA_VERSION,
            found = request.schema_version,
            "rejecting point request with wrong schema version"
        );
        return Err(MatchError::SchemaVersionMismatch {
            expected: SCHEMA_VERSION,
            found: request.schema_version,
        });
    }

    let mut rng = ChaCha8Rng::seed_from_u64(request.seed);
    let next = engine::apply_point(&request.match_state, request.player, request.point_type, &mut rng);
    debug!(
        player = request.player.as_str(),
        point_type = request.point_type.label(),
        complete = next.is_complete,
        "applied point"
    );

    let response = PointResponse { schema_version: SCHEMA_VERSION, match_state: next };
    Ok(serde_json::to_string(&response)?)
}

/// Serialize the embedded demo fixture.
pub fn sample_match_json() -> Result<String> {
    Ok(serde_json::to_string(&data::sample_match())?)
}
