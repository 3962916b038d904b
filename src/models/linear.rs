//! Ordinary least-squares linear regression

use crate::error::{ForecastError, Result};
use crate::features::FEATURE_COUNT;
use nalgebra::{DMatrix, DVector};

/// Fitted linear regressor with intercept
#[derive(Debug, Clone)]
pub struct LinearRegressor {
    /// Intercept followed by one weight per feature column
    coefficients: Vec<f64>,
}

impl LinearRegressor {
    /// Fit by least squares over the given features and targets.
    ///
    /// The solve goes through an SVD so rank-deficient design matrices
    /// (for example a zero-variance scaled column) still produce the
    /// minimum-norm solution instead of failing.
    pub fn fit(features: &[[f64; FEATURE_COUNT]], targets: &[f64]) -> Result<Self> {
        if features.is_empty() {
            return Err(ForecastError::InsufficientData(
                "Cannot fit linear model on empty training set".to_string(),
            ));
        }
        if features.len() != targets.len() {
            return Err(ForecastError::DataError(format!(
                "Feature count ({}) doesn't match target count ({})",
                features.len(),
                targets.len()
            )));
        }

        let rows = features.len();
        let design = DMatrix::from_fn(rows, FEATURE_COUNT + 1, |row, column| {
            if column == 0 {
                1.0
            } else {
                features[row][column - 1]
            }
        });
        let response = DVector::from_column_slice(targets);

        let svd = design.svd(true, true);
        let solution = svd.solve(&response, 1.0e-12).map_err(|e| {
            ForecastError::ComputationError(format!("Least-squares solve failed: {}", e))
        })?;

        Ok(Self {
            coefficients: solution.iter().copied().collect(),
        })
    }

    /// Predict the target for one feature vector
    pub fn predict(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        let mut value = self.coefficients[0];
        for (weight, feature) in self.coefficients[1..].iter().zip(features.iter()) {
            value += weight * feature;
        }
        value
    }

    /// Intercept and per-feature weights
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }
}
