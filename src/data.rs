//! Movement-ledger observations and loading helpers

use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// One inventory movement's net effect on stock for a given day.
///
/// Observations are immutable once read from the ledger; the forecasting
/// pipeline never mutates them, it works on derived copies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Calendar day of the movement
    pub date: NaiveDate,
    /// Net signed quantity for that day
    pub quantity: f64,
}

impl Observation {
    /// Create a new observation
    pub fn new(date: NaiveDate, quantity: f64) -> Self {
        Self { date, quantity }
    }
}

/// Build observations from `(date-string, quantity)` pairs.
///
/// Dates must be ISO `YYYY-MM-DD`. Mostly useful for tests and demos.
pub fn observations_from_pairs(pairs: &[(&str, f64)]) -> Result<Vec<Observation>> {
    pairs
        .iter()
        .map(|(date, quantity)| {
            let date = date.parse::<NaiveDate>().map_err(|e| {
                ForecastError::DataError(format!("Invalid date '{}': {}", date, e))
            })?;
            Ok(Observation::new(date, *quantity))
        })
        .collect()
}

/// Loader for movement-ledger exports
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load observations from a CSV ledger export with a `date,quantity` header.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Observation>> {
        let file = File::open(path)?;
        let mut reader = csv::Reader::from_reader(file);

        let mut observations = Vec::new();
        for record in reader.deserialize::<Observation>() {
            observations.push(record?);
        }

        if observations.is_empty() {
            return Err(ForecastError::DataError(
                "Ledger export contains no movement records".to_string(),
            ));
        }

        Ok(observations)
    }

    /// Validate an in-memory batch of ledger records.
    pub fn from_records(records: Vec<Observation>) -> Result<Vec<Observation>> {
        if records.is_empty() {
            return Err(ForecastError::DataError(
                "No movement records supplied".to_string(),
            ));
        }

        Ok(records)
    }
}

/// Earliest observation date, if any
pub fn first_date(observations: &[Observation]) -> Option<NaiveDate> {
    observations.iter().map(|o| o.date).min()
}

/// Latest observation date, if any
pub fn last_date(observations: &[Observation]) -> Option<NaiveDate> {
    observations.iter().map(|o| o.date).max()
}

/// Quantities in input order
pub fn quantities(observations: &[Observation]) -> Vec<f64> {
    observations.iter().map(|o| o.quantity).collect()
}
