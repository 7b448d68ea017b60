use serde::{Deserialize, Serialize};

/// Historical house sale from the reference dataset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseRecord {
    #[serde(rename = "livingAreaSqFt")]
    pub living_area_sq_ft: f64,
    pub bedrooms: u32,
    #[serde(rename = "fullBaths")]
    pub full_baths: u32,
    #[serde(rename = "yearBuilt")]
    pub year_built: i32,
    #[serde(rename = "overallQuality")]
    pub overall_quality: u8,
    #[serde(rename = "salePrice")]
    pub sale_price: f64,
}

impl HouseRecord {
    /// Feature vector in estimator order
    pub fn features(&self) -> [f64; 5] {
        [
            self.living_area_sq_ft,
            self.bedrooms as f64,
            self.full_baths as f64,
            self.year_built as f64,
            self.overall_quality as f64,
        ]
    }
}

/// Hypothetical house submitted for estimation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueryConfig {
    pub area: f64,
    pub bedrooms: u32,
    #[serde(rename = "fullBaths")]
    pub full_baths: u32,
    #[serde(rename = "yearBuilt")]
    pub year_built: i32,
    #[serde(rename = "overallQuality")]
    pub overall_quality: u8,
}

impl QueryConfig {
    /// Feature vector in estimator order: area, bedrooms, baths, year, quality
    pub fn features(&self) -> [f64; 5] {
        [
            self.area,
            self.bedrooms as f64,
            self.full_baths as f64,
            self.year_built as f64,
            self.overall_quality as f64,
        ]
    }
}

/// Which matcher pass produced a match set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPass {
    Strict,
    Fallback,
}

/// Comparable records for a query, in record store order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSet {
    pub pass: MatchPass,
    pub records: Vec<HouseRecord>,
}

impl MatchSet {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// Accuracy of a prediction against comparable sale prices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    Excellent,
    Good,
    Fair,
}

/// Prediction compared against the mean of its comparables
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub delta: f64,
    #[serde(rename = "pctError")]
    pub pct_error: f64,
    pub tier: Tier,
}

/// Tolerance windows and limits for both matcher passes
#[derive(Debug, Clone, Copy)]
pub struct MatchingParams {
    pub strict_area_tolerance: f64,
    pub strict_year_window: i32,
    pub strict_quality_window: u8,
    pub strict_limit: usize,
    pub fallback_area_tolerance: f64,
    pub fallback_bedroom_window: u32,
    pub fallback_year_window: i32,
    pub fallback_limit: usize,
}

impl Default for MatchingParams {
    fn default() -> Self {
        Self {
            strict_area_tolerance: 0.10,
            strict_year_window: 5,
            strict_quality_window: 1,
            strict_limit: 5,
            fallback_area_tolerance: 0.20,
            fallback_bedroom_window: 1,
            fallback_year_window: 10,
            fallback_limit: 10,
        }
    }
}

/// Dollar thresholds on |delta| separating the tiers
#[derive(Debug, Clone, Copy)]
pub struct TierThresholds {
    pub excellent_below: f64,
    pub good_below: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            excellent_below: 10_000.0,
            good_below: 25_000.0,
        }
    }
}

/// Predefined example house
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Preset {
    pub name: &'static str,
    pub query: QueryConfig,
}

pub const PRESETS: [Preset; 3] = [
    Preset {
        name: "simple",
        query: QueryConfig {
            area: 1200.0,
            bedrooms: 2,
            full_baths: 1,
            year_built: 1980,
            overall_quality: 5,
        },
    },
    Preset {
        name: "medium",
        query: QueryConfig {
            area: 2000.0,
            bedrooms: 3,
            full_baths: 2,
            year_built: 2010,
            overall_quality: 7,
        },
    },
    Preset {
        name: "luxury",
        query: QueryConfig {
            area: 3500.0,
            bedrooms: 5,
            full_baths: 4,
            year_built: 2020,
            overall_quality: 9,
        },
    },
];
