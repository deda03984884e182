//! Statistics aggregation: maps a point category onto the scoring player's
//! overall and current-set counter buckets.

use crate::models::{MatchState, PlayerId, PointType, StatBucket};

/// Record one point for the scoring player. The opponent's sheet is never
/// touched. The set bucket is the one current when the point arrives, created
/// on demand.
pub(crate) fn record_point(state: &mut MatchState, player: PlayerId, point_type: PointType) {
    let set_index = state.current_set_index();
    let stats = &mut state.player_mut(player).statistics;

    bump(&mut stats.overall, point_type);
    bump(stats.set_bucket_mut(set_index), point_type);
}

fn bump(bucket: &mut StatBucket, point_type: PointType) {
    match point_type {
        PointType::Ace => bucket.aces += 1,
        PointType::Winner => bucket.winners += 1,
        PointType::Fault => {
            // A missed first serve counts an attempt without a serve in, so
            // the derived percentage can only fall or hold.
            bucket.first_serve_attempts += 1;
            bucket.recompute_first_serve_percentage();
        }
        PointType::DoubleFault => bucket.double_faults += 1,
        PointType::UnforcedError => bucket.unforced_errors += 1,
        _ => bucket.points_won += 1,
    }
}
