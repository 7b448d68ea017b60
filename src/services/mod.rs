// Service exports
pub mod dataset;
pub mod model;

pub use dataset::{DatasetError, DatasetSource, RecordStore};
pub use model::load_or_fit;
