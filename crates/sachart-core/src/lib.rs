//! # sachart-core
//!
//! Core data model for sachart chart metrics.
//!
//! ## Modules
//!
//! - `dimensions` - partial size/margin input and its resolved form
//! - `data` - raw series data as handed over by the host
//! - `metrics` - computed chart metrics consumed by the rendering layer
//! - `error` - error type shared by the workspace

pub mod data;
pub mod dimensions;
pub mod error;
pub mod metrics;

pub use data::*;
pub use dimensions::*;
pub use error::*;
pub use metrics::*;

/// Milliseconds in one day
pub const MS_PER_DAY: f64 = 86_400_000.0;

/// Largest magnitude of a valid epoch-millisecond instant (+/- 100,000,000 days)
pub const MAX_INSTANT_MS: f64 = 8.64e15;
