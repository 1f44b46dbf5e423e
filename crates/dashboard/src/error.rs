use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Forecast error: {0}")]
    Forecast(#[from] forecast::ForecastError),
}
