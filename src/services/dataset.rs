use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal, NormalError};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use thiserror::Error;

use crate::core::stats::COLUMNS;
use crate::models::HouseRecord;

/// Errors that can occur when loading the record store
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid synthetic distribution: {0}")]
    DistributionError(#[from] NormalError),
}

/// Where the record store came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetSource {
    File,
    Synthetic,
}

/// One CSV row; unparsable or empty cells (e.g. `NA`) become `None`
///
/// `NaN` and `inf` parse as floats, so they are treated as missing when the
/// row is converted.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "GrLivArea", deserialize_with = "csv::invalid_option")]
    living_area: Option<f64>,
    #[serde(rename = "BedroomAbvGr", deserialize_with = "csv::invalid_option")]
    bedrooms: Option<u32>,
    #[serde(rename = "FullBath", deserialize_with = "csv::invalid_option")]
    full_baths: Option<u32>,
    #[serde(rename = "YearBuilt", deserialize_with = "csv::invalid_option")]
    year_built: Option<i32>,
    #[serde(rename = "OverallQual", deserialize_with = "csv::invalid_option")]
    overall_quality: Option<u8>,
    #[serde(rename = "SalePrice", deserialize_with = "csv::invalid_option")]
    sale_price: Option<f64>,
}

impl RawRow {
    fn into_record(self) -> Option<HouseRecord> {
        Some(HouseRecord {
            living_area_sq_ft: self.living_area.filter(|v| v.is_finite())?,
            bedrooms: self.bedrooms?,
            full_baths: self.full_baths?,
            year_built: self.year_built?,
            overall_quality: self.overall_quality?,
            sale_price: self.sale_price.filter(|v| v.is_finite())?,
        })
    }
}

/// Immutable in-memory table of historical sales
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<HouseRecord>,
    source: DatasetSource,
}

impl RecordStore {
    pub fn from_records(records: Vec<HouseRecord>, source: DatasetSource) -> Self {
        Self { records, source }
    }

    pub fn records(&self) -> &[HouseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn source(&self) -> DatasetSource {
        self.source
    }

    /// Load the dataset, or synthesize one when the file does not exist
    ///
    /// A file that exists but cannot be read is an error.
    pub fn load_or_synthesize<P: AsRef<Path>>(
        path: P,
        synthetic_rows: usize,
        seed: u64,
    ) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(
                "Dataset {} not found, using {} synthetic records (seed {})",
                path.display(),
                synthetic_rows,
                seed
            );
            return Self::synthetic(synthetic_rows, seed);
        }

        Self::from_csv_path(path)
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let reader = csv::Reader::from_path(path.as_ref())?;
        let store = Self::from_csv(reader)?;
        tracing::info!(
            "Loaded {} records from {}",
            store.len(),
            path.as_ref().display()
        );
        Ok(store)
    }

    /// Parse CSV with a header row, keeping only the six model columns
    pub fn from_reader<R: Read>(rdr: R) -> Result<Self, DatasetError> {
        Self::from_csv(csv::Reader::from_reader(rdr))
    }

    fn from_csv<R: Read>(mut reader: csv::Reader<R>) -> Result<Self, DatasetError> {
        let headers = reader.headers()?.clone();
        for column in COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DatasetError::MissingColumn(column.to_string()));
            }
        }

        let mut records = Vec::new();
        let mut dropped = 0usize;
        for row in reader.deserialize::<RawRow>() {
            match row?.into_record() {
                Some(record) => records.push(record),
                None => dropped += 1,
            }
        }

        if dropped > 0 {
            tracing::debug!("Dropped {} rows with missing values", dropped);
        }

        Ok(Self::from_records(records, DatasetSource::File))
    }

    /// Deterministic pseudo-random dataset for demos and tests
    pub fn synthetic(rows: usize, seed: u64) -> Result<Self, DatasetError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let area = Normal::<f64>::new(1500.0, 500.0)?;
        let price = Normal::<f64>::new(200_000.0, 80_000.0)?;

        let records = (0..rows)
            .map(|_| HouseRecord {
                living_area_sq_ft: area.sample(&mut rng).max(300.0),
                bedrooms: rng.random_range(1..=5),
                full_baths: rng.random_range(1..=3),
                year_built: rng.random_range(1950..=2022),
                overall_quality: rng.random_range(1..=10),
                sale_price: price.sample(&mut rng).max(10_000.0),
            })
            .collect();

        Ok(Self::from_records(records, DatasetSource::Synthetic))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
Id,GrLivArea,BedroomAbvGr,FullBath,YearBuilt,OverallQual,Street,SalePrice
1,1710,3,2,2003,7,Pave,208500
2,1262,3,2,1976,6,Pave,181500
3,NA,3,2,2001,7,Pave,223500
4,1717,3,1,1915,7,Pave,
5,2198,4,2,2000,8,Pave,250000
";

    #[test]
    fn test_csv_drops_missing_rows() {
        let store = RecordStore::from_reader(CSV.as_bytes()).unwrap();

        assert_eq!(store.source(), DatasetSource::File);
        assert_eq!(store.len(), 3);
        assert_eq!(store.records()[0].living_area_sq_ft, 1710.0);
        assert_eq!(store.records()[2].sale_price, 250_000.0);
    }

    #[test]
    fn test_csv_drops_non_finite_rows() {
        let mut csv =
            String::from("GrLivArea,BedroomAbvGr,FullBath,YearBuilt,OverallQual,SalePrice\n");
        for i in 0..20 {
            csv.push_str(&format!("{},3,2,2000,7,{}\n", 1400 + i * 10, 180_000 + i * 1000));
        }
        csv.push_str("NaN,3,2,2000,7,200000\n");
        csv.push_str("1500,3,2,2000,7,inf\n");
        csv.push_str("nan,3,2,2000,7,-inf\n");

        let store = RecordStore::from_reader(csv.as_bytes()).unwrap();

        assert_eq!(store.len(), 20);
        assert!(store
            .records()
            .iter()
            .all(|r| r.living_area_sq_ft.is_finite() && r.sale_price.is_finite()));
    }

    #[test]
    fn test_csv_missing_column() {
        let csv = "GrLivArea,BedroomAbvGr,FullBath,YearBuilt,SalePrice\n1710,3,2,2003,208500\n";
        let err = RecordStore::from_reader(csv.as_bytes()).unwrap_err();

        assert!(matches!(err, DatasetError::MissingColumn(ref c) if c == "OverallQual"));
    }

    #[test]
    fn test_synthetic_is_deterministic() {
        let a = RecordStore::synthetic(1000, 42).unwrap();
        let b = RecordStore::synthetic(1000, 42).unwrap();

        assert_eq!(a.len(), 1000);
        assert_eq!(a.records(), b.records());
        assert_eq!(a.source(), DatasetSource::Synthetic);
    }

    #[test]
    fn test_synthetic_domains() {
        let store = RecordStore::synthetic(500, 7).unwrap();

        for r in store.records() {
            assert!(r.living_area_sq_ft >= 300.0);
            assert!((1..=5).contains(&r.bedrooms));
            assert!((1..=3).contains(&r.full_baths));
            assert!((1950..=2022).contains(&r.year_built));
            assert!((1..=10).contains(&r.overall_quality));
            assert!(r.sale_price >= 10_000.0);
        }
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let store =
            RecordStore::load_or_synthesize(dir.path().join("train.csv"), 100, 42).unwrap();

        assert_eq!(store.source(), DatasetSource::Synthetic);
        assert_eq!(store.len(), 100);
    }

    #[test]
    fn test_existing_file_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("train.csv");
        std::fs::write(&path, CSV).unwrap();

        let store = RecordStore::load_or_synthesize(&path, 100, 42).unwrap();

        assert_eq!(store.source(), DatasetSource::File);
        assert_eq!(store.len(), 3);
    }
}
