use crate::model::PricePoint;

/// Simplified momentum oscillator over consecutive closes.
///
/// Intentionally not a textbook Wilder RSI: no smoothing, no fixed
/// lookback window, gains and losses are averaged over the full series
/// length, and the final transform is `100 - 100/ratio`. A series with
/// no losses reads exactly 100; an all-loss series clamps to 0 instead
/// of diverging.
pub fn compute_momentum(history: &[PricePoint]) -> f64 {
    if history.len() < 2 {
        // no deltas, same reading as a loss-free series
        return 100.0;
    }

    let mut gains = 0.0;
    let mut losses = 0.0;
    for pair in history.windows(2) {
        let delta = pair[1].price - pair[0].price;
        if delta >= 0.0 {
            gains += delta;
        } else {
            losses -= delta;
        }
    }

    let n = history.len() as f64;
    let avg_gain = gains / n;
    let avg_loss = losses / n;

    if avg_loss == 0.0 {
        return 100.0;
    }
    if avg_gain == 0.0 {
        return 0.0;
    }

    100.0 - (100.0 / (avg_gain / avg_loss))
}
