mod analyzer;
mod config;
mod forecaster;
mod generator;
mod model;
mod universe;
mod utils;

use analyzer::SnapshotGenerator;
use config::{load_config, AppConfig};
use forecaster::{Forecaster, LinearForecaster};
use generator::{RandomWalkGenerator, SeriesGenerator};
use std::sync::Arc;
use tokio::time::{sleep, Duration};
use tracing::{info, warn};
use tracing_subscriber;
use futures::future::join_all;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load configuration from file, falling back to the built-in defaults
    let config: Arc<AppConfig> = match load_config("config.json") {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            warn!("Config load failed ({}), using defaults", e);
            Arc::new(AppConfig::default())
        }
    };

    info!("Tracking {} symbols", config.symbols.len());
    if let Some(seed) = config.seed {
        info!("Deterministic run with base seed {}", seed);
    }

    // Off-universe symbols still process, only their display names fall back
    for symbol in &config.symbols {
        if universe::company_name(symbol).is_none() {
            let near = universe::find(symbol);
            if near.is_empty() {
                warn!("{} is outside the known universe", symbol);
            } else {
                warn!(
                    "{} is outside the known universe, close matches: {:?}",
                    symbol, near
                );
            }
        }
    }

    // Main processing loop
    loop {
        // Process all symbols concurrently
        let tasks: Vec<_> = config
            .symbols
            .iter()
            .map(|symbol| process_symbol(symbol, config.clone()))
            .collect();
        join_all(tasks).await;

        if config.refresh_interval_seconds == 0 {
            info!("Single pass finished, exiting.");
            break;
        }
        info!(
            "Pass finished, next refresh in {}s",
            config.refresh_interval_seconds
        );
        sleep(Duration::from_secs(config.refresh_interval_seconds)).await;
    }
}

/// Runs the full pipeline for one symbol: synthesize a history, draw the
/// display snapshot, then request a forecast over the generated series.
async fn process_symbol(symbol: &str, config: Arc<AppConfig>) {
    info!("Processing symbol: {}", symbol);

    let seed = config.seed.map(|base| symbol_seed(base, symbol));

    let mut generator = match seed {
        Some(s) => RandomWalkGenerator::with_seed(s),
        None => RandomWalkGenerator::new(),
    };
    let history = generator.generate_history(symbol);
    if let Some(last) = history.last() {
        info!(
            "{}: {} points, closing at {:.2} on {}",
            symbol,
            history.len(),
            last.price,
            last.date
        );
    }

    let mut snapshots = match seed {
        Some(s) => SnapshotGenerator::with_seed(s.wrapping_add(1)),
        None => SnapshotGenerator::new(),
    };
    let details = snapshots.stock_details(symbol);
    info!(
        "{} ({}): mcap {} | vol {} | change {}%",
        symbol, details.name, details.market_cap, details.volume, details.change_pct
    );

    let delay = Duration::from_millis(config.forecast_delay_ms);
    let mut forecaster = match seed {
        Some(s) => LinearForecaster::with_seed(delay, s.wrapping_add(2)),
        None => LinearForecaster::new(delay),
    };
    match forecaster.predict(symbol, &history).await {
        Ok(forecast) => {
            info!(
                "{}: {} | predicted {:.2} in {} days | confidence {}%",
                symbol,
                forecast.trend,
                forecast.predicted_price,
                forecast.projected.len(),
                forecast.confidence
            );
            info!("{}: {}", symbol, forecast.insight);
        }
        Err(e) => warn!("Forecast failed for {}: {}", symbol, e),
    }

    info!("Finished processing symbol: {}", symbol);
}

/// Folds the symbol into the base seed so concurrent symbols replay
/// distinct random streams under a single configured seed.
fn symbol_seed(base: u64, symbol: &str) -> u64 {
    symbol
        .bytes()
        .fold(base, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u64))
}
