use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::time::sleep;

use crate::analyzer::momentum::compute_momentum;
use crate::forecaster::insight::build_insight;
use crate::forecaster::regression::{fit_trend, project};
use crate::forecaster::traits::Forecaster;
use crate::model::{Forecast, ForecastError, PricePoint, Trend};

/// Days projected past the end of a history.
pub const FORECAST_HORIZON: usize = 7;

/// Linear-trend forecaster with a simulated analysis delay.
///
/// The future stays pending for `delay` before resolving, standing in
/// for a long-running model call; dropping it cancels the forecast.
/// Confidence is a cosmetic draw in [70, 95) and says nothing about
/// fit quality.
pub struct LinearForecaster {
    rng: StdRng,
    delay: Duration,
}

impl LinearForecaster {
    pub fn new(delay: Duration) -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            delay,
        }
    }

    /// Fixed-seed constructor for reproducible confidence draws.
    pub fn with_seed(delay: Duration, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            delay,
        }
    }
}

#[async_trait::async_trait]
impl Forecaster for LinearForecaster {
    /// Rejects short histories before the delay; everything after the
    /// sleep is pure computation over the already validated series.
    async fn predict(
        &mut self,
        symbol: &str,
        history: &[PricePoint],
    ) -> Result<Forecast, ForecastError> {
        let line = match fit_trend(history) {
            Some(line) => line,
            None => return Err(ForecastError::InsufficientHistory(history.len())),
        };

        sleep(self.delay).await;

        let projected = project(&line, history.len(), FORECAST_HORIZON);
        let predicted_price = projected[FORECAST_HORIZON - 1];
        let last_observed = history[history.len() - 1].price;

        let change_pct = (predicted_price - last_observed) / last_observed * 100.0;
        let trend = if change_pct > 0.0 {
            Trend::Bullish
        } else {
            Trend::Bearish
        };

        let momentum = compute_momentum(history);
        let confidence = self.rng.random_range(70..95);

        Ok(Forecast {
            projected,
            trend,
            confidence,
            insight: build_insight(symbol, trend, momentum),
            predicted_price,
        })
    }
}
