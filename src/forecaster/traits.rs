use crate::model::{Forecast, ForecastError, PricePoint};

#[async_trait::async_trait]
pub trait Forecaster: Send + Sync {
    async fn predict(
        &mut self,
        symbol: &str,
        history: &[PricePoint],
    ) -> Result<Forecast, ForecastError>;
}
