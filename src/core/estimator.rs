use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::models::{HouseRecord, QueryConfig};

/// Number of features the estimator consumes
pub const FEATURE_COUNT: usize = 5;

const SVD_EPSILON: f64 = 1e-9;
const SVD_MAX_ITERATIONS: usize = 1000;

/// Errors that can occur when building or loading a price model
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Expected 5 coefficients, got {0}")]
    ArityMismatch(usize),

    #[error("Need at least {needed} records to fit the model, got {got}")]
    InsufficientData { needed: usize, got: usize },

    #[error("Least squares solve failed: {0}")]
    Solve(&'static str),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Serialized form of a linear model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

/// Linear price model over (area, bedrooms, baths, year, quality)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearModel {
    coefficients: [f64; FEATURE_COUNT],
    intercept: f64,
}

impl LinearModel {
    /// Build a model from externally supplied coefficients
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Result<Self, ModelError> {
        let len = coefficients.len();
        let coefficients: [f64; FEATURE_COUNT] = coefficients
            .try_into()
            .map_err(|_| ModelError::ArityMismatch(len))?;

        Ok(Self {
            coefficients,
            intercept,
        })
    }

    pub fn coefficients(&self) -> &[f64; FEATURE_COUNT] {
        &self.coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Predicted sale price, never below zero
    #[inline]
    pub fn predict(&self, query: &QueryConfig) -> f64 {
        let linear: f64 = self
            .coefficients
            .iter()
            .zip(query.features())
            .map(|(c, x)| c * x)
            .sum::<f64>()
            + self.intercept;

        linear.max(0.0)
    }

    /// Fit by ordinary least squares with an intercept
    pub fn fit(records: &[HouseRecord]) -> Result<Self, ModelError> {
        let needed = FEATURE_COUNT + 1;
        if records.len() < needed {
            return Err(ModelError::InsufficientData {
                needed,
                got: records.len(),
            });
        }

        if records
            .iter()
            .any(|r| !r.sale_price.is_finite() || r.features().iter().any(|x| !x.is_finite()))
        {
            return Err(ModelError::Solve("non-finite input"));
        }

        // Design matrix: leading column of ones for the intercept
        let design = DMatrix::from_fn(records.len(), needed, |row, col| {
            if col == 0 {
                1.0
            } else {
                records[row].features()[col - 1]
            }
        });
        let target = DVector::from_iterator(records.len(), records.iter().map(|r| r.sale_price));

        let svd = design
            .try_svd(true, true, f64::EPSILON, SVD_MAX_ITERATIONS)
            .ok_or(ModelError::Solve("svd did not converge"))?;

        // Rank tolerance relative to the largest singular value
        let largest = svd.singular_values.max();
        let tolerance = (largest * records.len() as f64 * f64::EPSILON).max(SVD_EPSILON);
        if svd.rank(tolerance) < needed {
            return Err(ModelError::Solve("singular design"));
        }

        let solution = svd.solve(&target, tolerance).map_err(ModelError::Solve)?;

        if solution.iter().any(|v| !v.is_finite()) {
            return Err(ModelError::Solve("non-finite coefficients"));
        }

        let coefficients = solution.rows(1, FEATURE_COUNT).iter().copied().collect();
        Self::new(coefficients, solution[0])
    }

    /// Load a model artifact from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let contents = std::fs::read_to_string(path)?;
        let artifact: ModelArtifact = serde_json::from_str(&contents)?;
        Self::try_from(artifact)
    }

    /// Write the model as a JSON artifact
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ModelError> {
        let json = serde_json::to_string_pretty(&ModelArtifact::from(*self))?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

impl TryFrom<ModelArtifact> for LinearModel {
    type Error = ModelError;

    fn try_from(artifact: ModelArtifact) -> Result<Self, Self::Error> {
        Self::new(artifact.coefficients, artifact.intercept)
    }
}

impl From<LinearModel> for ModelArtifact {
    fn from(model: LinearModel) -> Self {
        Self {
            coefficients: model.coefficients.to_vec(),
            intercept: model.intercept,
        }
    }
}
