//! # Meridian Dashboard Engine
//!
//! This crate glues the pipeline together: filter → aggregate → KPIs →
//! forecast, in one synchronous pass per user interaction.
//!
//! ## Architectural Principles
//!
//! - **Layer 2 Orchestration:** The only crate that knows the pipeline
//!   order. The stages themselves stay independent and individually
//!   testable.
//! - **Stateless Recomputation:** A `snapshot` call derives everything from
//!   the immutable dataset; nothing is carried between interactions, so
//!   there is nothing to invalidate when a filter changes.
//!
//! ## Public API
//!
//! - `DashboardEngine`: runs one full recomputation.
//! - `DashboardSnapshot`: the complete output set one interaction renders.
//! - `DashboardError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod snapshot;

// Re-export the key components to create a clean, public-facing API.
pub use engine::DashboardEngine;
pub use error::DashboardError;
pub use snapshot::DashboardSnapshot;
