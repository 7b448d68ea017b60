use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{summarize, LinearModel, Matcher};
use crate::models::{
    ErrorResponse, EstimateRequest, EstimateResponse, HealthResponse, MatchPass, PresetEstimate,
    PresetsResponse, QueryConfig, TierThresholds, PRESETS,
};
use crate::services::RecordStore;

/// Application state shared across all handlers
///
/// Everything here is loaded once at startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RecordStore>,
    pub model: Arc<LinearModel>,
    pub matcher: Matcher,
    pub thresholds: TierThresholds,
}

impl AppState {
    /// Run the estimate pipeline for a query
    pub fn estimate(&self, query: QueryConfig) -> EstimateResponse {
        let predicted_price = self.model.predict(&query);
        let matches = self.matcher.find_matches(self.store.records(), &query);
        let comparison = summarize(&matches, predicted_price, &self.thresholds);

        let outcome = match (matches.pass, matches.len()) {
            (_, 0) => "no comparable records".to_string(),
            (MatchPass::Strict, n) => format!("{} similar houses found", n),
            (MatchPass::Fallback, n) => {
                format!("no close matches; {} houses with broadly similar features", n)
            }
        };

        EstimateResponse {
            estimate_id: uuid::Uuid::new_v4().to_string(),
            query,
            predicted_price,
            matches,
            comparison,
            outcome,
        }
    }
}

/// Configure all estimate-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/estimate", web::post().to(estimate))
        .route("/presets", web::get().to(presets));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        records: state.store.len(),
        dataset_source: state.store.source(),
    })
}

/// Estimate endpoint
///
/// POST /api/v1/estimate
///
/// Request body:
/// ```json
/// {
///   "area": 2000,
///   "bedrooms": 3,
///   "fullBaths": 2,
///   "yearBuilt": 2010,
///   "overallQuality": 7
/// }
/// ```
async fn estimate(
    state: web::Data<AppState>,
    req: web::Json<EstimateRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for estimate request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let query = QueryConfig::from(&*req);
    let response = state.estimate(query);

    tracing::info!(
        "Estimate {}: predicted {:.2}, {} comparables ({:?} pass)",
        response.estimate_id,
        response.predicted_price,
        response.matches.len(),
        response.matches.pass
    );

    HttpResponse::Ok().json(response)
}

/// Predefined example houses with their predicted prices
async fn presets(state: web::Data<AppState>) -> impl Responder {
    let presets = PRESETS
        .iter()
        .map(|preset| PresetEstimate {
            name: preset.name.to_string(),
            query: preset.query,
            predicted_price: state.model.predict(&preset.query),
        })
        .collect();

    HttpResponse::Ok().json(PresetsResponse { presets })
}
