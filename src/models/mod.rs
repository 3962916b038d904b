//! Regression models for stock-level prediction
//!
//! Two candidates compete for every forecast: an ordinary least-squares
//! linear model and a bagged ensemble of regression trees. The selector
//! works against the closed [`TrainedModel`] variant rather than model
//! names, so adding a candidate is a compile-checked change.

use crate::error::Result;
use crate::features::FEATURE_COUNT;
use crate::metrics;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod forest;
pub mod linear;

pub use forest::{ForestParams, RandomForestRegressor};
pub use linear::LinearRegressor;

/// Identifies which candidate model produced a prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelKind {
    /// Ordinary least-squares linear regression
    #[serde(rename = "linear")]
    Linear,
    /// Bagged regression-tree ensemble
    #[serde(rename = "random_forest")]
    RandomForest,
}

impl ModelKind {
    /// Stable string form used in serialized predictions
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Linear => "linear",
            ModelKind::RandomForest => "random_forest",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fitted candidate model
#[derive(Debug, Clone)]
pub enum TrainedModel {
    /// Fitted linear regressor
    Linear(LinearRegressor),
    /// Fitted tree ensemble
    Forest(RandomForestRegressor),
}

impl TrainedModel {
    /// Predict the target for one standardized feature vector
    pub fn predict(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        match self {
            TrainedModel::Linear(model) => model.predict(features),
            TrainedModel::Forest(model) => model.predict(features),
        }
    }

    /// Predict targets for a batch of standardized feature vectors
    pub fn predict_batch(&self, features: &[[f64; FEATURE_COUNT]]) -> Vec<f64> {
        features.iter().map(|f| self.predict(f)).collect()
    }

    /// Coefficient of determination on a held-out slice
    pub fn score(&self, features: &[[f64; FEATURE_COUNT]], targets: &[f64]) -> Result<f64> {
        let predicted = self.predict_batch(features);
        metrics::r2_score(targets, &predicted)
    }

    /// Which candidate this is
    pub fn kind(&self) -> ModelKind {
        match self {
            TrainedModel::Linear(_) => ModelKind::Linear,
            TrainedModel::Forest(_) => ModelKind::RandomForest,
        }
    }
}
