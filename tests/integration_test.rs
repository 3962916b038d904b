use std::io::Write;
use stock_forecast::{
    predictions_to_json, DataLoader, ForecastError, StockForecaster, Trend,
};
use tempfile::NamedTempFile;

// Helper function to create a ledger export with a mild upward trend
fn create_sample_ledger() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();

    writeln!(file, "date,quantity").unwrap();
    writeln!(file, "2023-01-01,100.0").unwrap();
    writeln!(file, "2023-01-02,102.0").unwrap();
    writeln!(file, "2023-01-03,101.0").unwrap();
    writeln!(file, "2023-01-04,103.0").unwrap();
    writeln!(file, "2023-01-05,102.0").unwrap();
    writeln!(file, "2023-01-06,104.0").unwrap();
    writeln!(file, "2023-01-07,103.0").unwrap();
    writeln!(file, "2023-01-08,105.0").unwrap();
    writeln!(file, "2023-01-09,104.0").unwrap();
    writeln!(file, "2023-01-10,106.0").unwrap();

    file
}

#[test]
fn test_full_forecast_workflow() {
    // 1. Load historical movements from a ledger export
    let ledger = create_sample_ledger();
    let observations = DataLoader::from_csv(ledger.path()).unwrap();
    assert_eq!(observations.len(), 10);

    // 2. Forecast the next week
    let forecaster = StockForecaster::new();
    let predictions = forecaster.forecast(&observations, 7).unwrap();
    assert_eq!(predictions.len(), 7);

    // 3. Check the contract on every prediction
    for prediction in &predictions {
        assert!(prediction.predicted_quantity >= 0.0);
        assert!(prediction.confidence_score >= 0.0);
        assert!(prediction.confidence_score <= 1.0);
        assert_ne!(prediction.trend, Trend::InsufficientData);
    }

    // 4. Serialize for the API layer
    let json = predictions_to_json(&predictions).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 7);

    let first = &entries[0];
    assert_eq!(first["date"], "2023-01-11");
    assert!(first["predicted_quantity"].is_number());
    assert!(first["confidence_score"].is_number());
    let model = first["model_used"].as_str().unwrap();
    assert!(model == "linear" || model == "random_forest");
    let trend = first["trend"].as_str().unwrap();
    assert!(trend == "upward" || trend == "downward" || trend == "stable");

    // 5. Test error handling
    let result = DataLoader::from_csv("/nonexistent/path.csv");
    assert!(matches!(result, Err(ForecastError::IoError(_))));
}

#[test]
fn test_reloaded_ledger_gives_identical_forecast() {
    // Loading the same export twice and forecasting must agree exactly
    let ledger = create_sample_ledger();

    let first = StockForecaster::new()
        .forecast(&DataLoader::from_csv(ledger.path()).unwrap(), 5)
        .unwrap();
    let second = StockForecaster::new()
        .forecast(&DataLoader::from_csv(ledger.path()).unwrap(), 5)
        .unwrap();

    assert_eq!(first, second);
}
