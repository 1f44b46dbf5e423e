//! # Meridian Dataset Crate
//!
//! This crate owns everything between the invoice file on disk and the
//! immutable in-memory `Dataset` the analytics run against.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Adapter:** The only crate that touches the filesystem. The
//!   analytics and forecast crates never see a path, only loaded data.
//! - **Drop, Never Repair:** Rows whose date or amount fail coercion are
//!   dropped at load time. Everything past the loader can rely on valid
//!   dates and finite amounts.
//! - **One Snapshot Per Session:** `DatasetStore` memoizes loads by file
//!   identity, so repeated recomputations share a single immutable snapshot.
//!
//! ## Public API
//!
//! - `load_dataset` / `read_dataset`: CSV loading with column coercion.
//! - `DatasetStore`: the per-session snapshot cache.
//! - `FilterSpec`: the client-type and date-range filter stage.
//! - `DatasetError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod error;
pub mod filter;
pub mod loader;
pub mod store;

// Re-export the key components to create a clean, public-facing API.
pub use error::DatasetError;
pub use filter::FilterSpec;
pub use loader::{load_dataset, read_dataset};
pub use store::DatasetStore;
