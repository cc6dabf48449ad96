// Core structs: PricePoint, StockSnapshot, Forecast
use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricePoint {
    pub date: String,
    pub price: f64,
    pub volume: u64,
}

/// Randomized display summary for a symbol, independent of any history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockSnapshot {
    pub name: String,
    pub market_cap: String,
    pub volume: String,
    pub change_pct: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trend {
    Bullish,
    Bearish,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Bullish => write!(f, "Bullish"),
            Trend::Bearish => write!(f, "Bearish"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Forecast {
    pub projected: Vec<f64>,
    pub trend: Trend,
    pub confidence: u8,
    pub insight: String,
    pub predicted_price: f64,
}

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("history has {0} points, need at least 2 for a trend fit")]
    InsufficientHistory(usize),
}
