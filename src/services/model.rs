use std::path::Path;

use crate::core::{LinearModel, ModelError};
use crate::services::dataset::RecordStore;

/// Load the model artifact, or fit one on the record store if it is absent
///
/// A present but malformed artifact, including one with the wrong number of
/// coefficients, is a configuration error and is returned as such.
pub fn load_or_fit<P: AsRef<Path>>(
    path: P,
    store: &RecordStore,
) -> Result<LinearModel, ModelError> {
    let path = path.as_ref();
    if path.exists() {
        let model = LinearModel::load(path)?;
        tracing::info!("Loaded model artifact from {}", path.display());
        return Ok(model);
    }

    tracing::info!(
        "Model artifact {} not found, fitting on {} records",
        path.display(),
        store.len()
    );
    let model = LinearModel::fit(store.records())?;
    tracing::debug!(
        "Fitted coefficients {:?}, intercept {}",
        model.coefficients(),
        model.intercept()
    );
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HouseRecord, QueryConfig};
    use crate::services::dataset::DatasetSource;

    #[test]
    fn test_fits_when_artifact_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::synthetic(1000, 42).unwrap();

        let model = load_or_fit(dir.path().join("model.json"), &store).unwrap();

        let price = model.predict(&QueryConfig {
            area: 2000.0,
            bedrooms: 3,
            full_baths: 2,
            year_built: 2010,
            overall_quality: 7,
        });
        assert!(price.is_finite());
    }

    #[test]
    fn test_prefers_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        let saved = LinearModel::new(vec![10.0, 5000.0, 8000.0, 200.0, 3000.0], 50_000.0).unwrap();
        saved.save(&path).unwrap();

        let model = load_or_fit(&path, &RecordStore::synthetic(10, 1).unwrap()).unwrap();

        assert_eq!(model, saved);
    }

    #[test]
    fn test_bad_artifact_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(load_or_fit(&path, &RecordStore::synthetic(100, 1).unwrap()).is_err());
    }

    #[test]
    fn test_singular_store_fails_fit() {
        let dir = tempfile::tempdir().unwrap();
        let record = HouseRecord {
            living_area_sq_ft: 1500.0,
            bedrooms: 3,
            full_baths: 2,
            year_built: 1990,
            overall_quality: 5,
            sale_price: 180_000.0,
        };
        let store = RecordStore::from_records(vec![record; 10], DatasetSource::File);

        let result = load_or_fit(dir.path().join("model.json"), &store);

        assert!(matches!(result, Err(ModelError::Solve("singular design"))));
    }
}
