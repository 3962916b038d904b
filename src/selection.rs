//! Model training and selection
//!
//! Fits both candidate models on the chronological head of the prepared
//! samples, scores each on the held-out tail, and keeps the better one.

use crate::error::{ForecastError, Result};
use crate::features::FEATURE_COUNT;
use crate::models::{ForestParams, LinearRegressor, RandomForestRegressor, TrainedModel};
use crate::utils::train_test_split_index;

/// Fraction of samples used for training; the rest validate
pub const TRAIN_RATIO: f64 = 0.8;

/// Smallest sample count for which both split slices are non-empty.
///
/// Two observations give a degenerate 1/1 split; the R² fallback for
/// constant validation targets keeps that case well defined.
pub const MIN_OBSERVATIONS: usize = 2;

/// Outcome of training and selecting between the candidate models
#[derive(Debug, Clone)]
pub struct Selection {
    /// The winning fitted model
    pub model: TrainedModel,
    /// Validation R² of the winning model (unclamped)
    pub validation_r2: f64,
    /// Validation R² clamped into [0, 1]
    pub confidence: f64,
}

/// Train both candidates and keep the higher validation scorer.
///
/// The split is positional with no shuffling, so the caller must supply
/// samples in chronological order. Ties go to the linear model.
pub fn train_and_select(
    features: &[[f64; FEATURE_COUNT]],
    targets: &[f64],
    forest: &ForestParams,
) -> Result<Selection> {
    if features.len() != targets.len() {
        return Err(ForecastError::DataError(format!(
            "Feature count ({}) doesn't match target count ({})",
            features.len(),
            targets.len()
        )));
    }
    if features.len() < MIN_OBSERVATIONS {
        return Err(ForecastError::InsufficientData(format!(
            "Need at least {} observations to train, got {}",
            MIN_OBSERVATIONS,
            features.len()
        )));
    }

    let split = train_test_split_index(features.len(), TRAIN_RATIO)?;
    let (train_features, validation_features) = features.split_at(split);
    let (train_targets, validation_targets) = targets.split_at(split);

    let linear = TrainedModel::Linear(LinearRegressor::fit(train_features, train_targets)?);
    let ensemble = TrainedModel::Forest(RandomForestRegressor::fit(
        train_features,
        train_targets,
        forest,
    )?);

    let mut best_model = linear;
    let mut best_score = best_model.score(validation_features, validation_targets)?;

    let ensemble_score = ensemble.score(validation_features, validation_targets)?;
    if ensemble_score > best_score {
        best_model = ensemble;
        best_score = ensemble_score;
    }

    let confidence = best_score.clamp(0.0, 1.0);
    log::info!(
        "Selected {} model (validation R2 {:.4}, confidence {:.2})",
        best_model.kind(),
        best_score,
        confidence
    );

    Ok(Selection {
        model: best_model,
        validation_r2: best_score,
        confidence,
    })
}
