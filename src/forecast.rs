//! Stock-level forecasting over a future horizon
//!
//! Ties the pipeline together: prepare historical observations, train and
//! select a model, then project it over the requested number of future
//! calendar days. Every call retrains from scratch on fresh local model
//! instances, so concurrent callers never share mutable state.

use crate::data::{self, Observation};
use crate::error::{ForecastError, Result};
use crate::features::{self, OUTLIER_Z_THRESHOLD};
use crate::models::{ForestParams, ModelKind};
use crate::selection;
use crate::trend::{self, Trend};
use crate::utils::future_dates;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Horizon used when the caller does not specify one
pub const DEFAULT_HORIZON_DAYS: usize = 7;

/// One forecasted stock level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Future calendar day the prediction is for
    pub date: NaiveDate,
    /// Predicted stock quantity, clamped to be non-negative
    pub predicted_quantity: f64,
    /// Validation R² of the selected model, clamped into [0, 1]
    pub confidence_score: f64,
    /// Which candidate model produced the prediction
    pub model_used: ModelKind,
    /// Trend of the historical series the model was trained on
    pub trend: Trend,
}

/// Forecasting configuration
#[derive(Debug, Clone)]
pub struct ForecastConfig {
    /// Z-score magnitude above which historical quantities are suppressed
    pub outlier_threshold: f64,
    /// Hyperparameters for the ensemble candidate
    pub forest: ForestParams,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            outlier_threshold: OUTLIER_Z_THRESHOLD,
            forest: ForestParams::default(),
        }
    }
}

/// Stateless stock forecaster.
///
/// Holds configuration only; every [`forecast`](Self::forecast) call builds
/// its own scaler and models and drops them when it returns.
#[derive(Debug, Clone, Default)]
pub struct StockForecaster {
    config: ForecastConfig,
}

impl StockForecaster {
    /// Create a forecaster with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a forecaster with the given configuration
    pub fn with_config(config: ForecastConfig) -> Self {
        Self { config }
    }

    /// Forecast stock levels for each of the next `horizon_days` days.
    ///
    /// Returns one prediction per calendar day, ascending, starting the day
    /// after the latest historical date. Fails with `InvalidParameter` for a
    /// zero horizon and `InsufficientData` for fewer than two observations.
    pub fn forecast(
        &self,
        observations: &[Observation],
        horizon_days: usize,
    ) -> Result<Vec<Prediction>> {
        if horizon_days == 0 {
            return Err(ForecastError::InvalidParameter(
                "Horizon must be at least one day".to_string(),
            ));
        }
        if observations.len() < selection::MIN_OBSERVATIONS {
            return Err(ForecastError::InsufficientData(format!(
                "Need at least {} historical observations, got {}",
                selection::MIN_OBSERVATIONS,
                observations.len()
            )));
        }

        let prepared = features::prepare(observations, self.config.outlier_threshold)?;
        let selected =
            selection::train_and_select(&prepared.features, &prepared.targets, &self.config.forest)?;

        let last_date = data::last_date(observations).ok_or_else(|| {
            ForecastError::DataError("No observation dates".to_string())
        })?;
        let dates = future_dates(last_date, horizon_days);

        let raw: Vec<_> = dates
            .iter()
            .map(|&d| features::raw_features(d, prepared.base_date))
            .collect();
        let scaled = prepared.scaler.transform(&raw);
        let predicted = selected.model.predict_batch(&scaled);

        let trend = trend::detect(&prepared.targets);
        let model_used = selected.model.kind();

        log::debug!(
            "Forecasting {} day(s) from {} with the {} model",
            horizon_days,
            last_date,
            model_used
        );

        Ok(dates
            .into_iter()
            .zip(predicted)
            .map(|(date, quantity)| Prediction {
                date,
                predicted_quantity: quantity.max(0.0),
                confidence_score: selected.confidence,
                model_used,
                trend,
            })
            .collect())
    }

    /// Forecast with the default one-week horizon
    pub fn forecast_default(&self, observations: &[Observation]) -> Result<Vec<Prediction>> {
        self.forecast(observations, DEFAULT_HORIZON_DAYS)
    }
}

/// Serialize predictions the way the web layer emits them
pub fn predictions_to_json(predictions: &[Prediction]) -> Result<String> {
    Ok(serde_json::to_string_pretty(predictions)?)
}
