// Forecaster module: trend fit, projection and narrative assembly.

pub mod insight;
pub mod linear;
pub mod regression;
pub mod traits;

// Re-export the main forecaster implementation for ease of use.
pub use linear::LinearForecaster;
pub use traits::Forecaster;
