use serde::{Deserialize, Serialize};

use crate::models::domain::{ComparisonReport, MatchSet, QueryConfig};
use crate::services::DatasetSource;

/// Response for the estimate endpoint
#[derive(Debug, Clone, Serialize)]
pub struct EstimateResponse {
    #[serde(rename = "estimateId")]
    pub estimate_id: String,
    pub query: QueryConfig,
    #[serde(rename = "predictedPrice")]
    pub predicted_price: f64,
    pub matches: MatchSet,
    pub comparison: Option<ComparisonReport>,
    pub outcome: String,
}

/// A predefined house with its prediction
#[derive(Debug, Clone, Serialize)]
pub struct PresetEstimate {
    pub name: String,
    pub query: QueryConfig,
    #[serde(rename = "predictedPrice")]
    pub predicted_price: f64,
}

/// Response for the presets endpoint
#[derive(Debug, Clone, Serialize)]
pub struct PresetsResponse {
    pub presets: Vec<PresetEstimate>,
}

/// Response for the dataset statistics endpoint
#[derive(Debug, Clone, Serialize)]
pub struct DatasetStatsResponse {
    pub source: DatasetSource,
    #[serde(rename = "totalRecords")]
    pub total_records: usize,
    #[serde(rename = "meanSalePrice")]
    pub mean_sale_price: Option<f64>,
    #[serde(rename = "meanLivingArea")]
    pub mean_living_area: Option<f64>,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub records: usize,
    #[serde(rename = "datasetSource")]
    pub dataset_source: DatasetSource,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
