use serde::{Deserialize, Serialize};

use super::point::PointType;

/// One entry of the rolling textual update feed.
///
/// The feed is owned by the hosting session, never by the engine: point
/// entries are derived from transitions by the caller, informational entries
/// come from the periodic refresh tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchUpdate {
    /// Wall-clock label, e.g. "2:45 PM".
    pub time: String,
    pub content: String,
    /// Point category for point entries; absent for informational ticks.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub point_type: Option<PointType>,
    pub important: bool,
}

impl MatchUpdate {
    pub fn info(time: String, content: impl Into<String>) -> Self {
        Self { time, content: content.into(), point_type: None, important: false }
    }

    pub fn point(time: String, content: impl Into<String>, point_type: PointType, important: bool) -> Self {
        Self { time, content: content.into(), point_type: Some(point_type), important }
    }
}
