//! Trend detection over the cleaned quantity series

use serde::{Deserialize, Serialize};
use std::fmt;

/// Slope magnitude below which a series is considered stable
pub const SLOPE_THRESHOLD: f64 = 0.1;

/// Categorical summary of the slope of historical quantities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    /// Slope above the threshold
    #[serde(rename = "upward")]
    Upward,
    /// Slope below the negative threshold
    #[serde(rename = "downward")]
    Downward,
    /// Slope within the threshold band
    #[serde(rename = "stable")]
    Stable,
    /// Fewer than two observations, no slope to measure
    #[serde(rename = "insufficient data")]
    InsufficientData,
}

impl Trend {
    /// Stable string form used in serialized predictions
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Upward => "upward",
            Trend::Downward => "downward",
            Trend::Stable => "stable",
            Trend::InsufficientData => "insufficient data",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify the trend of a quantity series.
///
/// Fits a degree-1 least-squares line over the series indexed by position
/// (not calendar distance) and buckets the slope.
pub fn detect(quantities: &[f64]) -> Trend {
    if quantities.len() < 2 {
        return Trend::InsufficientData;
    }

    let n = quantities.len() as f64;
    let x_mean = (quantities.len() - 1) as f64 / 2.0;
    let y_mean = quantities.iter().sum::<f64>() / n;

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (i, &y) in quantities.iter().enumerate() {
        let dx = i as f64 - x_mean;
        numerator += dx * (y - y_mean);
        denominator += dx * dx;
    }

    // denominator is positive for any series of two or more points
    let slope = numerator / denominator;

    if slope > SLOPE_THRESHOLD {
        Trend::Upward
    } else if slope < -SLOPE_THRESHOLD {
        Trend::Downward
    } else {
        Trend::Stable
    }
}
