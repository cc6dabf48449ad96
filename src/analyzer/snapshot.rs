use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::StockSnapshot;
use crate::universe;

/// Randomized display summary for the panel next to a chart.
///
/// Snapshots are independent of any generated history, so two calls
/// for the same symbol need not agree with each other or with it.
pub struct SnapshotGenerator {
    rng: StdRng,
}

impl SnapshotGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Fixed-seed constructor for reproducible snapshots.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn stock_details(&mut self, symbol: &str) -> StockSnapshot {
        StockSnapshot {
            name: universe::company_name(symbol).unwrap_or(symbol).to_string(),
            market_cap: format!("{:.2}T", self.rng.random_range(0.0..2.5)),
            volume: format!("{:.1}M", self.rng.random_range(0.0..50.0)),
            change_pct: format!("{:.2}", self.rng.random_range(-2.0..2.0)),
        }
    }
}
