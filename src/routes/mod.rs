// Route exports
pub mod dataset;
pub mod estimates;

use actix_web::web;

pub use estimates::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(estimates::configure)
            .configure(dataset::configure),
    );
}
