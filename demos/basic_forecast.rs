use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use stock_forecast::data::Observation;
use stock_forecast::StockForecaster;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("Stock Forecast: Basic Forecasting Example");
    println!("=========================================\n");

    // Create sample data
    println!("Creating sample movement history...");
    let observations = create_sample_history();
    println!("Sample history created: {} daily observations\n", observations.len());

    // Forecast the next two weeks
    println!("Training models and forecasting 14 days...");
    let forecaster = StockForecaster::new();
    let predictions = forecaster.forecast(&observations, 14)?;

    let first = &predictions[0];
    println!(
        "Selected model: {} (confidence {:.2}, trend: {})\n",
        first.model_used, first.confidence_score, first.trend
    );

    println!("{:<12}  {:>10}", "Date", "Predicted");
    for prediction in &predictions {
        println!(
            "{:<12}  {:>10.1}",
            prediction.date, prediction.predicted_quantity
        );
    }

    println!("\nForecasting complete!");

    Ok(())
}

/// 60 days of demand with a gentle upward drift, weekly seasonality,
/// and a little noise
fn create_sample_history() -> Vec<Observation> {
    let start = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    let noise = Normal::new(0.0, 2.0).unwrap();

    (0..60)
        .map(|i| {
            let date = start + Duration::days(i);
            let weekday_bump = match i % 7 {
                5 | 6 => 8.0, // weekend restock
                _ => 0.0,
            };
            let quantity = 50.0 + 0.4 * i as f64 + weekday_bump + noise.sample(&mut rng);
            Observation::new(date, quantity.max(0.0))
        })
        .collect()
}
