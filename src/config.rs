use serde::Deserialize;
use std::fs;

use crate::universe;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Symbols to process each refresh pass.
    pub symbols: Vec<String>,
    /// Seconds between passes. Zero means run a single pass and exit.
    pub refresh_interval_seconds: u64,
    /// Simulated analysis latency per forecast, in milliseconds.
    pub forecast_delay_ms: u64,
    /// Base seed for reproducible runs. Absent means OS entropy.
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            symbols: universe::SYMBOLS.iter().map(|s| s.to_string()).collect(),
            refresh_interval_seconds: 300,
            forecast_delay_ms: 2_000,
            seed: None,
        }
    }
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_full_universe() {
        let config = AppConfig::default();
        assert_eq!(config.symbols.len(), universe::SYMBOLS.len());
        assert_eq!(config.refresh_interval_seconds, 300);
        assert_eq!(config.forecast_delay_ms, 2_000);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn partial_config_fills_missing_fields_from_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"symbols": ["AAPL"], "seed": 7}"#).unwrap();
        assert_eq!(config.symbols, vec!["AAPL".to_string()]);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.refresh_interval_seconds, 300);
        assert_eq!(config.forecast_delay_ms, 2_000);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_config("no-such-config.json").is_err());
    }
}
