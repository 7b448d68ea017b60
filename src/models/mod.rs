// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    ComparisonReport, HouseRecord, MatchPass, MatchSet, MatchingParams, Preset, QueryConfig,
    Tier, TierThresholds, PRESETS,
};
pub use requests::{EstimateRequest, HistogramRequest, MAX_HISTOGRAM_BINS};
pub use responses::{
    DatasetStatsResponse, ErrorResponse, EstimateResponse, HealthResponse, PresetEstimate,
    PresetsResponse,
};
