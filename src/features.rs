//! Historical data preparation: outlier suppression and feature scaling
//!
//! Turns a list of ledger observations into standardized numeric feature
//! vectors and a cleaned target series. The scaler fitted here is the only
//! one ever used to transform future-date features; it is never refit.

use crate::data::Observation;
use crate::error::{ForecastError, Result};
use chrono::{Datelike, NaiveDate};
use statrs::statistics::{Data, OrderStatistics, Statistics};

/// Number of calendar-derived feature columns per observation
pub const FEATURE_COUNT: usize = 4;

/// Z-score magnitude above which a quantity is treated as an outlier
pub const OUTLIER_Z_THRESHOLD: f64 = 3.0;

/// Prepared training data for the model selector
#[derive(Debug, Clone)]
pub struct Prepared {
    /// Standardized feature vectors, one per observation, input order preserved
    pub features: Vec<[f64; FEATURE_COUNT]>,
    /// Outlier-suppressed quantities, input order preserved
    pub targets: Vec<f64>,
    /// Scaler fitted on the historical features only
    pub scaler: StandardScaler,
    /// Earliest observation date, the origin for the day-offset feature
    pub base_date: NaiveDate,
}

/// Per-column standardization (zero mean, unit variance)
#[derive(Debug, Clone)]
pub struct StandardScaler {
    means: [f64; FEATURE_COUNT],
    stds: [f64; FEATURE_COUNT],
}

impl StandardScaler {
    /// Fit column statistics from training feature vectors.
    ///
    /// Zero-variance columns keep a scale factor of 1.0 so they are centered
    /// but not divided by zero; a constant column standardizes to all zeros.
    pub fn fit(features: &[[f64; FEATURE_COUNT]]) -> Result<Self> {
        if features.is_empty() {
            return Err(ForecastError::DataError(
                "Cannot fit scaler on empty feature set".to_string(),
            ));
        }

        let mut means = [0.0; FEATURE_COUNT];
        let mut stds = [1.0; FEATURE_COUNT];

        for column in 0..FEATURE_COUNT {
            let values: Vec<f64> = features.iter().map(|f| f[column]).collect();
            means[column] = values.iter().mean();
            let std = values.iter().population_std_dev();
            if std > f64::EPSILON {
                stds[column] = std;
            }
        }

        Ok(Self { means, stds })
    }

    /// Standardize a single feature vector with the fitted statistics
    pub fn transform_one(&self, features: &[f64; FEATURE_COUNT]) -> [f64; FEATURE_COUNT] {
        let mut scaled = [0.0; FEATURE_COUNT];
        for column in 0..FEATURE_COUNT {
            scaled[column] = (features[column] - self.means[column]) / self.stds[column];
        }
        scaled
    }

    /// Standardize a batch of feature vectors with the fitted statistics
    pub fn transform(&self, features: &[[f64; FEATURE_COUNT]]) -> Vec<[f64; FEATURE_COUNT]> {
        features.iter().map(|f| self.transform_one(f)).collect()
    }
}

/// Raw (unscaled) calendar features for one date: day offset from the base
/// date, weekday index (Monday = 0), day of month, and month number.
pub fn raw_features(date: NaiveDate, base_date: NaiveDate) -> [f64; FEATURE_COUNT] {
    [
        (date - base_date).num_days() as f64,
        date.weekday().num_days_from_monday() as f64,
        date.day() as f64,
        date.month() as f64,
    ]
}

/// Replace outlier quantities with the series median.
///
/// An outlier is any value whose Z-score against the whole-series mean and
/// population standard deviation exceeds `threshold` in magnitude. Values
/// are replaced rather than removed so date alignment is preserved. A
/// zero-variance series has no outliers and is returned unchanged.
pub fn suppress_outliers(quantities: &[f64], threshold: f64) -> Vec<f64> {
    let mean = quantities.iter().mean();
    let std = quantities.iter().population_std_dev();

    if std <= f64::EPSILON {
        return quantities.to_vec();
    }

    let median = Data::new(quantities.to_vec()).median();

    quantities
        .iter()
        .map(|&q| {
            let z = (q - mean) / std;
            if z.abs() > threshold {
                median
            } else {
                q
            }
        })
        .collect()
}

/// Prepare historical observations for model training.
///
/// Produces standardized feature vectors and outlier-suppressed targets in
/// input order, along with the fitted scaler and base date needed to build
/// comparable feature vectors for future dates.
pub fn prepare(observations: &[Observation], outlier_threshold: f64) -> Result<Prepared> {
    if observations.is_empty() {
        return Err(ForecastError::DataError(
            "No historical observations to prepare".to_string(),
        ));
    }

    let base_date = observations
        .iter()
        .map(|o| o.date)
        .min()
        .ok_or_else(|| ForecastError::DataError("No observation dates".to_string()))?;

    let raw: Vec<[f64; FEATURE_COUNT]> = observations
        .iter()
        .map(|o| raw_features(o.date, base_date))
        .collect();

    let quantities: Vec<f64> = observations.iter().map(|o| o.quantity).collect();
    let targets = suppress_outliers(&quantities, outlier_threshold);

    let scaler = StandardScaler::fit(&raw)?;
    let features = scaler.transform(&raw);

    Ok(Prepared {
        features,
        targets,
        scaler,
        base_date,
    })
}
