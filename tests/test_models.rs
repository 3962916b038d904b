use assert_approx_eq::assert_approx_eq;
use stock_forecast::models::{
    ForestParams, LinearRegressor, ModelKind, RandomForestRegressor, TrainedModel,
};
use stock_forecast::ForecastError;

fn line_samples() -> (Vec<[f64; 4]>, Vec<f64>) {
    // y = 3x + 5 over the first feature; the rest are constant
    let features: Vec<[f64; 4]> = (0..12).map(|i| [i as f64, 1.0, 1.0, 1.0]).collect();
    let targets: Vec<f64> = (0..12).map(|i| 3.0 * i as f64 + 5.0).collect();
    (features, targets)
}

#[test]
fn test_linear_recovers_exact_line() {
    let (features, targets) = line_samples();
    let model = LinearRegressor::fit(&features, &targets).unwrap();

    // Constant columns make the design rank deficient; the SVD solve still
    // reproduces the line exactly.
    assert_approx_eq!(model.predict(&[4.0, 1.0, 1.0, 1.0]), 17.0, 1e-6);
    assert_approx_eq!(model.predict(&[20.0, 1.0, 1.0, 1.0]), 65.0, 1e-6);
}

#[test]
fn test_linear_rejects_empty_and_mismatched_input() {
    let result = LinearRegressor::fit(&[], &[]);
    assert!(matches!(result, Err(ForecastError::InsufficientData(_))));

    let result = LinearRegressor::fit(&[[0.0; 4]], &[1.0, 2.0]);
    assert!(matches!(result, Err(ForecastError::DataError(_))));
}

#[test]
fn test_forest_predicts_constant_series() {
    let features: Vec<[f64; 4]> = (0..10).map(|i| [i as f64, 0.0, 0.0, 0.0]).collect();
    let targets = vec![10.0; 10];

    let params = ForestParams::default();
    let forest = RandomForestRegressor::fit(&features, &targets, &params).unwrap();

    assert_eq!(forest.tree_count(), params.trees);
    assert_approx_eq!(forest.predict(&[3.0, 0.0, 0.0, 0.0]), 10.0, 1e-9);
}

#[test]
fn test_forest_prediction_stays_within_target_range() {
    let (features, targets) = line_samples();
    let forest = RandomForestRegressor::fit(&features, &targets, &ForestParams::default()).unwrap();

    // Tree ensembles cannot extrapolate past the observed targets
    let prediction = forest.predict(&[100.0, 1.0, 1.0, 1.0]);
    assert!(prediction >= 5.0 && prediction <= 41.0);
}

#[test]
fn test_forest_is_deterministic_for_fixed_seed() {
    let (features, targets) = line_samples();
    let params = ForestParams::default();

    let first = RandomForestRegressor::fit(&features, &targets, &params).unwrap();
    let second = RandomForestRegressor::fit(&features, &targets, &params).unwrap();

    for i in 0..20 {
        let point = [i as f64 * 0.7, 1.0, 1.0, 1.0];
        assert_eq!(first.predict(&point), second.predict(&point));
    }
}

#[test]
fn test_forest_rejects_zero_trees() {
    let (features, targets) = line_samples();
    let params = ForestParams {
        trees: 0,
        ..ForestParams::default()
    };

    let result = RandomForestRegressor::fit(&features, &targets, &params);
    assert!(matches!(result, Err(ForecastError::InvalidParameter(_))));
}

#[test]
fn test_trained_model_scoring_and_kind() {
    let (features, targets) = line_samples();

    let linear = TrainedModel::Linear(LinearRegressor::fit(&features, &targets).unwrap());
    assert_eq!(linear.kind(), ModelKind::Linear);

    let r2 = linear.score(&features, &targets).unwrap();
    assert!(r2 > 0.999);

    let forest = TrainedModel::Forest(
        RandomForestRegressor::fit(&features, &targets, &ForestParams::default()).unwrap(),
    );
    assert_eq!(forest.kind(), ModelKind::RandomForest);
    assert_eq!(
        forest.predict_batch(&features).len(),
        features.len()
    );
}

#[test]
fn test_model_kind_serialization() {
    assert_eq!(ModelKind::Linear.as_str(), "linear");
    assert_eq!(ModelKind::RandomForest.as_str(), "random_forest");

    let json = serde_json::to_string(&ModelKind::RandomForest).unwrap();
    assert_eq!(json, "\"random_forest\"");
}
