//! Chart metrics: pixel extents, inferred domains and the optional time axis.

use sachart_core::{ChartData, ChartMetrics, DimensionsSpec, MetricsError};

use crate::axis::AxisGenerator;
use crate::calendar::{ChronoCalendar, TickFormatter, TimeBuckets};
use crate::config::LayoutConfig;
use crate::resolve::DimensionResolver;

// ============================================================================
// EXTENT TRACKING
// ============================================================================

/// Running min/max that starts empty; NaN observations are ignored
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Extent {
    bounds: Option<(f64, f64)>,
}

impl Extent {
    pub fn include(&mut self, value: f64) {
        self.include_span(value, value);
    }

    /// Widen by a `[lo, hi]` span, each end applied only where it extends
    /// the current extreme
    pub fn include_span(&mut self, lo: f64, hi: f64) {
        if lo.is_nan() || hi.is_nan() {
            return;
        }
        self.bounds = Some(match self.bounds {
            None => (lo, hi),
            Some((min, max)) => (min.min(lo), max.max(hi)),
        });
    }

    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.bounds
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }
}

/// Sort x-indexed series in place and collect the x and y extents
pub fn infer_extents(data: &mut ChartData) -> (Extent, Extent) {
    let mut x = Extent::default();
    let mut y = Extent::default();

    for (index, series) in data.series.iter_mut().enumerate() {
        series.sort_by_x();
        if let Some((first, last)) = series.x_bounds() {
            x.include_span(first, last);
        }
        for value in series.y_values() {
            y.include(value);
        }
        tracing::trace!(
            index,
            points = series.data.len(),
            paired = series.is_paired(),
            "scanned series"
        );
    }

    (x, y)
}

// ============================================================================
// METRICS COMPUTER
// ============================================================================

/// Turns dimensions and chart data into [`ChartMetrics`]
#[derive(Debug, Clone)]
pub struct MetricsComputer<C = ChronoCalendar> {
    config: LayoutConfig,
    resolver: DimensionResolver,
    axis: AxisGenerator<C>,
}

impl Default for MetricsComputer {
    fn default() -> Self {
        Self::new(ChronoCalendar::default(), LayoutConfig::default())
    }
}

impl<C: TimeBuckets + TickFormatter> MetricsComputer<C> {
    pub fn new(calendar: C, config: LayoutConfig) -> Self {
        Self {
            resolver: DimensionResolver::new(&config),
            axis: AxisGenerator::new(calendar, config.clone()),
            config,
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Compute metrics for `data` drawn on a surface `measured_width` wide.
    ///
    /// X-indexed series in `data` are sorted by x in place. Fails with
    /// [`MetricsError::EmptyDataset`] when no point carries a y value and
    /// with [`MetricsError::MissingTimeDomain`] when a time axis is requested
    /// without any `[x, y]` pairs.
    pub fn compute(
        &self,
        measured_width: Option<f64>,
        dims: Option<&DimensionsSpec>,
        data: &mut ChartData,
    ) -> Result<ChartMetrics, MetricsError> {
        let cfg = &self.config;
        let dims = self.resolver.resolve(measured_width, dims);
        let margin = dims.margin;
        let axis_enabled = data.x_axis.is_enabled();

        let svg_width = dims.width;
        let svg_height = dims.height;

        let mut chart_height = dims.inner_height();
        let mut x_axis_label_start = None;
        if axis_enabled {
            chart_height -= cfg.x_axis_height;
            x_axis_label_start = Some(chart_height + margin.top + cfg.label_offset());
        }
        let chart_width = dims.inner_width();

        let (x_extent, y_extent) = infer_extents(data);

        let Some((mut y_data_min, mut y_data_max)) = y_extent.bounds() else {
            tracing::warn!(series = data.series.len(), "no y values in chart data");
            return Err(MetricsError::EmptyDataset);
        };
        let (x_data_min, x_data_max) = x_extent.bounds().unwrap_or((f64::NAN, f64::NAN));

        y_data_max += y_data_max * cfg.y_headroom;
        if y_data_min < 0.0 {
            y_data_min += y_data_min * cfg.y_headroom;
        } else {
            y_data_min = 0.0;
        }

        tracing::debug!(
            x_data_min,
            x_data_max,
            y_data_min,
            y_data_max,
            chart_width,
            chart_height,
            "inferred chart domains"
        );

        let y_range = [chart_height + margin.top, margin.top];
        let mut metrics = ChartMetrics {
            svg_width,
            svg_height,
            chart_width,
            chart_height,
            x_data_min,
            x_data_max,
            y_data_min,
            y_data_max,
            x_domain: [x_data_min, x_data_max],
            x_range: [margin.left, chart_width + margin.left],
            y_domain: [y_data_min, y_data_max],
            y_range,
            x_axis_label_start,
            x_axis_inclusive_area: None,
            x_axis_points: None,
        };

        if data.x_axis.is_time_axis() {
            if data.x_axis.extend_area_to_axis {
                metrics.x_axis_inclusive_area = Some(y_range[0] + cfg.x_axis_height);
            }
            if x_extent.is_empty() {
                tracing::warn!("time axis requested without any [x, y] series");
                return Err(MetricsError::MissingTimeDomain);
            }

            let mut points = self.axis.generate(x_data_min, x_data_max, chart_width)?;
            // ticks at a zero margin would sit on the chart edge
            if margin.left == 0.0 && !points.is_empty() {
                points.remove(0);
            }
            if margin.right == 0.0 {
                points.pop();
            }
            metrics.x_axis_points = Some(points);
        }

        Ok(metrics)
    }
}
