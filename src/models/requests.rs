use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::QueryConfig;

/// Request to estimate a house price
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EstimateRequest {
    #[validate(range(min = 500.0, max = 5000.0))]
    pub area: f64,
    #[validate(range(min = 1, max = 6))]
    pub bedrooms: u32,
    #[validate(range(min = 1, max = 4))]
    #[serde(alias = "full_baths", rename = "fullBaths")]
    pub full_baths: u32,
    #[validate(range(min = 1950, max = 2023))]
    #[serde(alias = "year_built", rename = "yearBuilt")]
    pub year_built: i32,
    #[validate(range(min = 1, max = 10))]
    #[serde(alias = "overall_quality", rename = "overallQuality")]
    pub overall_quality: u8,
}

impl From<&EstimateRequest> for QueryConfig {
    fn from(req: &EstimateRequest) -> Self {
        QueryConfig {
            area: req.area,
            bedrooms: req.bedrooms,
            full_baths: req.full_baths,
            year_built: req.year_built,
            overall_quality: req.overall_quality,
        }
    }
}

/// Query parameters for the price histogram
///
/// Requests above `MAX_HISTOGRAM_BINS` are capped rather than rejected.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct HistogramRequest {
    #[serde(default = "default_bins")]
    #[validate(range(min = 1))]
    pub bins: usize,
}

pub const MAX_HISTOGRAM_BINS: usize = 200;

impl HistogramRequest {
    /// Requested bin count, capped at `MAX_HISTOGRAM_BINS`
    pub fn bin_count(&self) -> usize {
        self.bins.min(MAX_HISTOGRAM_BINS)
    }
}

fn default_bins() -> usize {
    50
}
