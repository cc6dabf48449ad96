use crate::model::Trend;

/// Renders the one-paragraph narrative for a forecast. The bullish
/// template quotes the momentum reading to one decimal; the bearish
/// one varies only by symbol.
pub fn build_insight(symbol: &str, trend: Trend, momentum: f64) -> String {
    match trend {
        Trend::Bullish => format!(
            "Analysis of {} suggests a positive breakout. RSI at {:.1} indicates healthy momentum with room for growth. Volume patterns confirm institutional interest.",
            symbol, momentum
        ),
        Trend::Bearish => format!(
            "Market indicators for {} show potential consolidation or slight correction. Moving averages suggest resistance at current levels. Caution advised for short-term positions.",
            symbol
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullish_insight_quotes_symbol_and_momentum() {
        let insight = build_insight("AAPL", Trend::Bullish, 87.5);
        assert!(insight.starts_with("Analysis of AAPL"));
        assert!(insight.contains("RSI at 87.5"));
    }

    #[test]
    fn bullish_momentum_is_rendered_to_one_decimal() {
        let insight = build_insight("NVDA", Trend::Bullish, 100.0);
        assert!(insight.contains("RSI at 100.0"));
    }

    #[test]
    fn bearish_insight_ignores_momentum() {
        let insight = build_insight("TSLA", Trend::Bearish, 42.0);
        assert_eq!(
            insight,
            "Market indicators for TSLA show potential consolidation or slight correction. Moving averages suggest resistance at current levels. Caution advised for short-term positions."
        );
    }
}
