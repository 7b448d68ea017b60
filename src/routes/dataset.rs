use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{area_price_points, correlation_matrix, price_histogram, summarize_dataset};
use crate::models::{DatasetStatsResponse, ErrorResponse, HistogramRequest};
use crate::routes::estimates::AppState;

/// Configure dataset summary routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/dataset")
            .route("/stats", web::get().to(stats))
            .route("/correlations", web::get().to(correlations))
            .route("/histogram", web::get().to(histogram))
            .route("/points", web::get().to(points)),
    );
}

/// GET /api/v1/dataset/stats
async fn stats(state: web::Data<AppState>) -> impl Responder {
    let summary = summarize_dataset(state.store.records());

    HttpResponse::Ok().json(DatasetStatsResponse {
        source: state.store.source(),
        total_records: summary.total_records,
        mean_sale_price: summary.mean_sale_price,
        mean_living_area: summary.mean_living_area,
    })
}

/// GET /api/v1/dataset/correlations
async fn correlations(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(correlation_matrix(state.store.records()))
}

/// GET /api/v1/dataset/histogram?bins={bins}
async fn histogram(
    state: web::Data<AppState>,
    query: web::Query<HistogramRequest>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    HttpResponse::Ok().json(serde_json::json!({
        "bins": price_histogram(state.store.records(), query.bin_count()),
    }))
}

/// GET /api/v1/dataset/points
async fn points(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "points": area_price_points(state.store.records()),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LinearModel, Matcher};
    use crate::models::TierThresholds;
    use crate::services::RecordStore;
    use actix_web::{test, App};
    use std::sync::Arc;

    fn test_state() -> AppState {
        AppState {
            store: Arc::new(RecordStore::synthetic(200, 42).unwrap()),
            model: Arc::new(LinearModel::new(vec![0.0; 5], 0.0).unwrap()),
            matcher: Matcher::with_default_params(),
            thresholds: TierThresholds::default(),
        }
    }

    #[actix_web::test]
    async fn test_stats_endpoint() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/dataset/stats").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["source"], "synthetic");
        assert_eq!(body["totalRecords"], 200);
        assert!(body["meanSalePrice"].as_f64().unwrap() > 0.0);
    }

    #[actix_web::test]
    async fn test_histogram_default_bins() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/dataset/histogram").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let bins = body["bins"].as_array().unwrap();
        assert_eq!(bins.len(), 50);
        let total: u64 = bins.iter().map(|b| b["count"].as_u64().unwrap()).sum();
        assert_eq!(total, 200);
    }

    #[actix_web::test]
    async fn test_histogram_rejects_zero_bins() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/dataset/histogram?bins=0").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_histogram_caps_large_bin_counts() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/dataset/histogram?bins=500").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        let bins = body["bins"].as_array().unwrap();
        assert_eq!(bins.len(), 200);
        let total: u64 = bins.iter().map(|b| b["count"].as_u64().unwrap()).sum();
        assert_eq!(total, 200);
    }

    #[actix_web::test]
    async fn test_points_endpoint() {
        let state = test_state();
        let first = state.store.records()[0];
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/dataset/points").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let points = body["points"].as_array().unwrap();
        assert_eq!(points.len(), 200);
        assert_eq!(points[0]["area"].as_f64().unwrap(), first.living_area_sq_ft);
        assert_eq!(points[0]["price"].as_f64().unwrap(), first.sale_price);
    }
}
