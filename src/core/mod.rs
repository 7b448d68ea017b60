// Core algorithm exports
pub mod comparison;
pub mod estimator;
pub mod filters;
pub mod matcher;
pub mod stats;

pub use comparison::{classify, summarize};
pub use estimator::{LinearModel, ModelArtifact, ModelError, FEATURE_COUNT};
pub use filters::{matches_fallback, matches_strict};
pub use matcher::Matcher;
pub use stats::{
    area_price_points, correlation_matrix, price_histogram, summarize_dataset, CorrelationMatrix,
    DatasetSummary, HistogramBin, ScatterPoint,
};
