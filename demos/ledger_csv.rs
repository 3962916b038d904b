use stock_forecast::{predictions_to_json, DataLoader, StockForecaster, DEFAULT_HORIZON_DAYS};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("Usage: ledger_csv <movements.csv> [horizon_days]");
            std::process::exit(2);
        }
    };
    let horizon = match args.next() {
        Some(value) => value.parse::<usize>()?,
        None => DEFAULT_HORIZON_DAYS,
    };

    let observations = DataLoader::from_csv(&path)?;
    eprintln!(
        "Loaded {} movement records from {}",
        observations.len(),
        path
    );

    let forecaster = StockForecaster::new();
    let predictions = forecaster.forecast(&observations, horizon)?;

    // The same JSON shape the API layer returns to callers
    println!("{}", predictions_to_json(&predictions)?);

    Ok(())
}
