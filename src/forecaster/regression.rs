use crate::model::PricePoint;
use crate::utils::round2;

/// Least-squares line of price against the 0-based day index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
}

/// Fits `price = slope * index + intercept` over the whole history.
/// Returns `None` below 2 points where the fit is undefined; with 2 or
/// more distinct indices the denominator is always nonzero.
pub fn fit_trend(history: &[PricePoint]) -> Option<TrendLine> {
    let n = history.len();
    if n < 2 {
        return None;
    }

    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    for (i, point) in history.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += point.price;
        sum_xy += x * point.price;
        sum_xx += x * x;
    }

    let n = n as f64;
    let slope = (n * sum_xy - sum_x * sum_y) / (n * sum_xx - sum_x * sum_x);
    let intercept = (sum_y - slope * sum_x) / n;

    Some(TrendLine { slope, intercept })
}

/// Extrapolates the fitted line `horizon` steps ahead, rounded to cents.
/// Projection x-values run `n + 1 ..= n + horizon` while the last observed
/// index is `n - 1`; the one-step gap is intentional.
pub fn project(line: &TrendLine, n: usize, horizon: usize) -> Vec<f64> {
    (1..=horizon)
        .map(|k| round2(line.slope * (n + k) as f64 + line.intercept))
        .collect()
}
