//! House Price Dashboard - price estimation with comparable-sales lookup
//!
//! This library provides the estimation pipeline behind the dashboard: a
//! linear price model, a two-pass similarity matcher over historical sales,
//! and a comparison report grading the prediction against real prices.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{summarize, LinearModel, Matcher};
pub use models::{ComparisonReport, HouseRecord, MatchSet, QueryConfig, Tier};
pub use services::RecordStore;
