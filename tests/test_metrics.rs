use assert_approx_eq::assert_approx_eq;
use rstest::rstest;
use stock_forecast::metrics::{mean_absolute_error, mean_squared_error, r2_score};
use stock_forecast::ForecastError;

#[test]
fn test_r2_of_perfect_prediction() {
    let actual = vec![1.0, 2.0, 3.0, 4.0];
    let r2 = r2_score(&actual, &actual).unwrap();
    assert_approx_eq!(r2, 1.0, 1e-12);
}

#[test]
fn test_r2_of_mean_prediction_is_zero() {
    let actual = vec![1.0, 2.0, 3.0, 4.0];
    let predicted = vec![2.5; 4];
    let r2 = r2_score(&actual, &predicted).unwrap();
    assert_approx_eq!(r2, 0.0, 1e-12);
}

#[test]
fn test_r2_can_go_negative() {
    let actual = vec![1.0, 2.0, 3.0];
    let predicted = vec![10.0, 10.0, 10.0];
    let r2 = r2_score(&actual, &predicted).unwrap();
    assert!(r2 < 0.0);
}

#[rstest]
#[case(vec![5.0, 5.0, 5.0], vec![5.0, 5.0, 5.0], 1.0)]
#[case(vec![5.0, 5.0, 5.0], vec![5.0, 6.0, 5.0], 0.0)]
fn test_r2_of_constant_actuals(
    #[case] actual: Vec<f64>,
    #[case] predicted: Vec<f64>,
    #[case] expected: f64,
) {
    // Constant series have zero total sum of squares; the guarded
    // definition scores an exact match 1.0 and anything else 0.0.
    let r2 = r2_score(&actual, &predicted).unwrap();
    assert_approx_eq!(r2, expected, 1e-12);
}

#[test]
fn test_mean_squared_error() {
    let actual = vec![1.0, 2.0, 3.0];
    let predicted = vec![2.0, 2.0, 5.0];
    let mse = mean_squared_error(&actual, &predicted).unwrap();
    assert_approx_eq!(mse, (1.0 + 0.0 + 4.0) / 3.0, 1e-12);
}

#[test]
fn test_mean_absolute_error() {
    let actual = vec![1.0, 2.0, 3.0];
    let predicted = vec![2.0, 2.0, 5.0];
    let mae = mean_absolute_error(&actual, &predicted).unwrap();
    assert_approx_eq!(mae, 1.0, 1e-12);
}

#[rstest]
#[case(vec![], vec![])]
#[case(vec![1.0], vec![1.0, 2.0])]
fn test_length_validation(#[case] actual: Vec<f64>, #[case] predicted: Vec<f64>) {
    assert!(matches!(
        r2_score(&actual, &predicted),
        Err(ForecastError::DataError(_))
    ));
    assert!(matches!(
        mean_squared_error(&actual, &predicted),
        Err(ForecastError::DataError(_))
    ));
    assert!(matches!(
        mean_absolute_error(&actual, &predicted),
        Err(ForecastError::DataError(_))
    ));
}
