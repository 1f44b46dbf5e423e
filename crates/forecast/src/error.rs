use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("Not enough data to project: {0}")]
    NotEnoughData(String),

    #[error("Forecast horizon must be at least 1, got {0}")]
    InvalidHorizon(usize),

    #[error("EMA span must be at least 1, got {0}")]
    InvalidSpan(usize),
}
