//! Computed chart metrics handed to the rendering layer

use serde::{Deserialize, Serialize};

/// Labeled position on the time axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickDescriptor {
    pub text: String,
    /// Epoch milliseconds
    pub x: f64,
}

impl TickDescriptor {
    pub fn new(text: impl Into<String>, x: f64) -> Self {
        Self {
            text: text.into(),
            x,
        }
    }
}

/// Geometry and domains for one chart.
///
/// Built fresh per computation and owned by the caller. `x_data_min` and
/// `x_data_max` are NaN when no series carries `[x, y]` pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMetrics {
    pub svg_width: f64,
    pub svg_height: f64,
    pub chart_width: f64,
    pub chart_height: f64,

    pub x_data_min: f64,
    pub x_data_max: f64,
    pub y_data_min: f64,
    pub y_data_max: f64,

    pub x_domain: [f64; 2],
    pub x_range: [f64; 2],
    pub y_domain: [f64; 2],
    /// Inverted: `[bottom, top]` in pixels
    pub y_range: [f64; 2],

    /// Vertical pixel offset of the x-axis labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis_label_start: Option<f64>,
    /// Bottom pixel of the plotted area when it extends through the axis strip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis_inclusive_area: Option<f64>,
    /// Time-axis ticks, ascending by `x`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis_points: Option<Vec<TickDescriptor>>,
}

impl ChartMetrics {
    /// True when the x domain was inferred from `[x, y]` pairs
    pub fn has_x_domain(&self) -> bool {
        !self.x_data_min.is_nan() && !self.x_data_max.is_nan()
    }

    pub fn ticks(&self) -> &[TickDescriptor] {
        self.x_axis_points.as_deref().unwrap_or_default()
    }
}
