//! # sachart-layout
//!
//! D3.js-style chart metrics for a rendering layer.
//! Given raw series data and a target surface size, computes pixel extents,
//! value domains and ranges and, for time-indexed data, labelled axis ticks.
//!
//! ## Architecture
//!
//! Uses Strategy pattern for:
//! - Calendar bucketing and label formatting (`TimeBuckets`, `TickFormatter`)
//! - Scale computation (`Scale`)
//!
//! ## Modules
//!
//! - `resolve` - fills partial dimensions from the measured width
//! - `metrics` - domain inference and pixel extents
//! - `axis` - time-axis regime selection, candidate ticks and thinning
//! - `calendar` - chrono-backed calendar collaborators
//! - `chartkit` - linear scales built from computed metrics
//! - `config` - layout constants

pub mod axis;
pub mod calendar;
pub mod chartkit;
pub mod config;
pub mod metrics;
pub mod resolve;

pub use axis::*;
pub use calendar::*;
pub use chartkit::*;
pub use config::*;
pub use metrics::*;
pub use resolve::*;

// Re-export the data model for convenience
pub use sachart_core::{
    ChartData, ChartDimensions, ChartMargin, ChartMetrics, DataPoint, DimensionsSpec, MarginsSpec,
    MetricsError, Series, TickDescriptor, XAxisConfig, YValue,
};

/// Compute metrics with the default layout constants and a UTC calendar.
///
/// `data` is sorted in place: x-indexed series end up ascending by x.
pub fn compute_chart_metrics(
    measured_width: Option<f64>,
    dims: Option<&DimensionsSpec>,
    data: &mut ChartData,
) -> Result<ChartMetrics, MetricsError> {
    MetricsComputer::default().compute(measured_width, dims, data)
}
