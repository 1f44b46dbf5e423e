//! # Meridian Forecast Crate
//!
//! Projects the monthly sales series forward. The model is deliberately a
//! baseline: an exponential moving average smooths the observed months, and
//! every projected month repeats the last smoothed value. There is no trend
//! or seasonality handling; the projection answers "what if sales hold
//! steady", nothing more.
//!
//! ## Public API
//!
//! - `Forecaster`: the projection engine, parameterized by smoothing span.
//! - `ForecastError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod error;
pub mod projector;

// Re-export the key components to create a clean, public-facing API.
pub use error::ForecastError;
pub use projector::Forecaster;
