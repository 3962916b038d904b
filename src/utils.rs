//! Utility functions for the stock_forecast crate

use crate::error::{ForecastError, Result};
use chrono::{Duration, NaiveDate};

/// Index at which an ordered sample set splits into training and validation.
///
/// The split is purely positional; callers must supply chronologically
/// meaningful ordering. The index is clamped so both slices are non-empty
/// for any `len >= 2`.
pub fn train_test_split_index(len: usize, train_ratio: f64) -> Result<usize> {
    if train_ratio <= 0.0 || train_ratio >= 1.0 {
        return Err(ForecastError::InvalidParameter(
            "Train ratio must be between 0 and 1 (exclusive)".to_string(),
        ));
    }
    if len < 2 {
        return Err(ForecastError::InsufficientData(format!(
            "Cannot split {} sample(s) into training and validation sets",
            len
        )));
    }

    let index = (len as f64 * train_ratio).floor() as usize;
    Ok(index.clamp(1, len - 1))
}

/// Consecutive future calendar days, starting the day after `last_date`
pub fn future_dates(last_date: NaiveDate, horizon: usize) -> Vec<NaiveDate> {
    (1..=horizon as i64)
        .map(|offset| last_date + Duration::days(offset))
        .collect()
}
