//! Layout tuning constants

/// Constants used while resolving dimensions, inferring domains and
/// laying out time-axis ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Surface width used when none could be measured (px)
    pub fallback_width: f64,
    /// Default height as a fraction of width
    pub height_ratio: f64,
    /// Default for every unset margin side (px)
    pub default_margin: f64,
    /// Strip reserved below the chart for axis labels (px)
    pub x_axis_height: f64,
    /// Label baseline inset from the bottom of the axis strip (px)
    pub label_inset: f64,
    /// Fractional headroom added to the y domain
    pub y_headroom: f64,
    /// Assumed horizontal footprint of one tick label (px)
    pub label_footprint: f64,
    /// Spans shorter than this (days) get hourly ticks
    pub hourly_max_days: f64,
    /// Spans shorter than this (days) get day ticks, longer get months
    pub weekly_max_days: f64,
    /// Day step between ticks in the weekly regime
    pub weekly_step_days: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            fallback_width: 300.0,
            height_ratio: 0.4,
            default_margin: 50.0,
            x_axis_height: 50.0,
            label_inset: 16.0,
            y_headroom: 0.2,
            label_footprint: 62.5,
            hourly_max_days: 2.0,
            weekly_max_days: 65.0,
            weekly_step_days: 7,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fallback_width(mut self, width: f64) -> Self {
        self.fallback_width = width;
        self
    }

    pub fn with_default_margin(mut self, margin: f64) -> Self {
        self.default_margin = margin;
        self
    }

    pub fn with_label_footprint(mut self, footprint: f64) -> Self {
        self.label_footprint = footprint;
        self
    }

    pub fn with_y_headroom(mut self, headroom: f64) -> Self {
        self.y_headroom = headroom;
        self
    }

    /// Label offset from the top of the axis strip
    pub fn label_offset(&self) -> f64 {
        self.x_axis_height - self.label_inset
    }
}
