use crate::error::ConfigError;
use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub data: DataSource,
    pub forecast: Forecasting,
    pub report: Reporting,
}

/// Where the invoice dataset is read from.
#[derive(Debug, Clone, Deserialize)]
pub struct DataSource {
    /// Path to the invoice CSV file.
    pub path: String,
}

/// Parameters for the monthly sales projection.
#[derive(Debug, Clone, Deserialize)]
pub struct Forecasting {
    /// Default number of future months to project.
    /// The consumer-facing horizon control is bounded to 3..=12.
    pub horizon_months: u32,
    /// Span of the exponential moving average used for smoothing.
    /// The decay factor is 2 / (span + 1).
    pub ema_span: usize,
}

/// Parameters for report rendering.
#[derive(Debug, Clone, Deserialize)]
pub struct Reporting {
    /// How many products the product ranking keeps.
    pub top_products: usize,
}

impl Config {
    /// Checks the constraints TOML deserialization cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data.path.is_empty() {
            return Err(ConfigError::ValidationError(
                "data.path must not be empty".to_string(),
            ));
        }
        if self.forecast.horizon_months == 0 {
            return Err(ConfigError::ValidationError(
                "forecast.horizon_months must be at least 1".to_string(),
            ));
        }
        if self.forecast.ema_span == 0 {
            return Err(ConfigError::ValidationError(
                "forecast.ema_span must be at least 1".to_string(),
            ));
        }
        if self.report.top_products == 0 {
            return Err(ConfigError::ValidationError(
                "report.top_products must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
