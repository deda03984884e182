pub mod json_api;

pub use json_api::{apply_point_json, sample_match_json, PointRequest, PointResponse};
