//! # Stock Forecast
//!
//! A Rust library for forecasting near-future inventory stock levels from
//! historical movement-ledger data.
//!
//! ## Features
//!
//! - Movement-ledger ingestion (in-memory records or CSV exports)
//! - Historical data preparation (Z-score outlier suppression, calendar
//!   feature construction, standardization)
//! - Dual-model training with held-out validation (linear regression vs. a
//!   bagged regression-tree ensemble)
//! - Per-day predictions with a trend label and confidence score
//!
//! ## Quick Start
//!
//! ```no_run
//! use stock_forecast::{DataLoader, StockForecaster};
//!
//! fn main() -> stock_forecast::Result<()> {
//!     // Load historical movements from a ledger export
//!     let observations = DataLoader::from_csv("movements.csv")?;
//!
//!     // Forecast the next week of stock levels
//!     let forecaster = StockForecaster::new();
//!     let predictions = forecaster.forecast_default(&observations)?;
//!
//!     for p in &predictions {
//!         println!(
//!             "{}: {:.1} units ({}, confidence {:.2})",
//!             p.date, p.predicted_quantity, p.trend, p.confidence_score
//!         );
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Every forecast call retrains from scratch on the supplied observations;
//! nothing is cached across calls, so concurrent use is safe and results
//! are deterministic for identical input.

pub mod data;
pub mod error;
pub mod features;
pub mod forecast;
pub mod metrics;
pub mod models;
pub mod selection;
pub mod trend;
pub mod utils;

// Re-export commonly used types
pub use crate::data::{DataLoader, Observation};
pub use crate::error::{ForecastError, Result};
pub use crate::forecast::{
    predictions_to_json, ForecastConfig, Prediction, StockForecaster, DEFAULT_HORIZON_DAYS,
};
pub use crate::models::{ModelKind, TrainedModel};
pub use crate::selection::Selection;
pub use crate::trend::Trend;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
