use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::PricePoint;
use crate::utils::round2;

/// Days of lookback in a generated history: 30 days ago through today,
/// one point per day, 31 points total.
pub const HISTORY_DAYS: i64 = 30;

pub trait SeriesGenerator {
    fn generate_history(&mut self, symbol: &str) -> Vec<PricePoint>;
}

/// Bounded random walk standing in for a real price feed.
pub struct RandomWalkGenerator {
    rng: StdRng,
}

impl RandomWalkGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Fixed-seed constructor for reproducible series.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl SeriesGenerator for RandomWalkGenerator {
    /// Walks from a uniform base in [150, 650) with a uniform step in
    /// [-5, 5) per day, applied before each point is recorded. Prices
    /// have no floor; a long losing streak may go non-positive.
    fn generate_history(&mut self, _symbol: &str) -> Vec<PricePoint> {
        let now = Utc::now();
        let mut price: f64 = self.rng.random_range(150.0..650.0);
        let mut points = Vec::with_capacity(HISTORY_DAYS as usize + 1);

        for days_back in (0..=HISTORY_DAYS).rev() {
            let date = now - Duration::days(days_back);
            price += self.rng.random_range(-5.0..5.0);

            points.push(PricePoint {
                date: date.format("%b %-d").to_string(),
                price: round2(price),
                volume: self.rng.random_range(500_000..1_500_000),
            });
        }

        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_labels(now: chrono::DateTime<Utc>) -> Vec<String> {
        (0..=HISTORY_DAYS)
            .rev()
            .map(|d| (now - Duration::days(d)).format("%b %-d").to_string())
            .collect()
    }

    #[test]
    fn history_spans_31_days_ending_today() {
        let mut generator = RandomWalkGenerator::with_seed(42);
        let before = expected_labels(Utc::now());
        let history = generator.generate_history("AAPL");
        let after = expected_labels(Utc::now());

        assert_eq!(history.len(), 31);
        let labels: Vec<String> = history.iter().map(|p| p.date.clone()).collect();
        // tolerate a midnight rollover between the two clock reads
        assert!(labels == before || labels == after, "labels {:?}", labels);
    }

    #[test]
    fn points_stay_inside_generation_bounds() {
        let mut generator = RandomWalkGenerator::with_seed(7);
        let history = generator.generate_history("MSFT");

        // first point is base [150, 650) plus one step [-5, 5), then rounded
        assert!(history[0].price >= 145.0 && history[0].price <= 655.0);
        for point in &history {
            assert!((500_000..1_500_000).contains(&point.volume));
            assert_eq!(round2(point.price), point.price, "{} not rounded", point.price);
        }
        for pair in history.windows(2) {
            let step = (pair[1].price - pair[0].price).abs();
            assert!(step <= 5.01, "daily step {} exceeds bound", step);
        }
    }

    #[test]
    fn same_seed_replays_the_same_walk() {
        let mut a = RandomWalkGenerator::with_seed(1234);
        let mut b = RandomWalkGenerator::with_seed(1234);
        assert_eq!(a.generate_history("TSLA"), b.generate_history("TSLA"));
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = RandomWalkGenerator::with_seed(1);
        let mut b = RandomWalkGenerator::with_seed(2);
        let walk_a: Vec<f64> = a.generate_history("TSLA").iter().map(|p| p.price).collect();
        let walk_b: Vec<f64> = b.generate_history("TSLA").iter().map(|p| p.price).collect();
        assert_ne!(walk_a, walk_b);
    }
}
