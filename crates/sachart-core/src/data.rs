//! Raw chart data: series of points plus x-axis options.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::MetricsError;

// ============================================================================
// POINT VALUES
// ============================================================================

/// The y slot of an `[x, y]` pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YValue {
    Single(f64),
    /// Stacked blocks, plotted as their sum
    Stacked(Vec<f64>),
}

impl YValue {
    /// Plotted value. Stacked blocks are summed with NaN entries skipped.
    pub fn total(&self) -> f64 {
        match self {
            Self::Single(v) => *v,
            Self::Stacked(values) => values.iter().filter(|v| !v.is_nan()).sum(),
        }
    }
}

impl From<f64> for YValue {
    fn from(v: f64) -> Self {
        Self::Single(v)
    }
}

impl From<Vec<f64>> for YValue {
    fn from(values: Vec<f64>) -> Self {
        Self::Stacked(values)
    }
}

/// One data point: a bare y value or an `[x, y]` pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataPoint {
    Value(f64),
    Pair(f64, YValue),
}

impl DataPoint {
    pub fn pair(x: f64, y: impl Into<YValue>) -> Self {
        Self::Pair(x, y.into())
    }

    /// X coordinate, present only on pairs
    pub fn x(&self) -> Option<f64> {
        match self {
            Self::Value(_) => None,
            Self::Pair(x, _) => Some(*x),
        }
    }

    /// Plotted y value
    pub fn y(&self) -> f64 {
        match self {
            Self::Value(v) => *v,
            Self::Pair(_, y) => y.total(),
        }
    }

    pub fn is_pair(&self) -> bool {
        matches!(self, Self::Pair(..))
    }
}

impl From<f64> for DataPoint {
    fn from(v: f64) -> Self {
        Self::Value(v)
    }
}

/// Ascending by x; points without a comparable x sort last
fn cmp_x(a: &DataPoint, b: &DataPoint) -> Ordering {
    let key = |p: &DataPoint| p.x().filter(|x| !x.is_nan());
    match (key(a), key(b)) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// ============================================================================
// SERIES
// ============================================================================

/// One plotted line/set of points
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Series {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub data: Vec<DataPoint>,
}

impl Series {
    pub fn new(data: Vec<DataPoint>) -> Self {
        Self { name: None, data }
    }

    pub fn named(name: impl Into<String>, data: Vec<DataPoint>) -> Self {
        Self {
            name: Some(name.into()),
            data,
        }
    }

    /// Series of bare y values
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        Self::new(values.into_iter().map(DataPoint::Value).collect())
    }

    /// Series of `[x, y]` pairs
    pub fn from_pairs(pairs: impl IntoIterator<Item = (f64, f64)>) -> Self {
        Self::new(pairs.into_iter().map(|(x, y)| DataPoint::pair(x, y)).collect())
    }

    /// A series is x-indexed when its first point is a pair
    pub fn is_paired(&self) -> bool {
        self.data.first().is_some_and(DataPoint::is_pair)
    }

    /// Stable in-place sort ascending by x. No-op for bare-value series.
    pub fn sort_by_x(&mut self) {
        if self.is_paired() {
            self.data.sort_by(cmp_x);
        }
    }

    /// Smallest and largest x of an already sorted, paired series
    pub fn x_bounds(&self) -> Option<(f64, f64)> {
        if !self.is_paired() {
            return None;
        }
        let comparable = |p: &DataPoint| p.x().filter(|x| !x.is_nan());
        let first = self.data.iter().find_map(comparable)?;
        let last = self.data.iter().rev().find_map(comparable)?;
        Some((first, last))
    }

    /// Plotted y values in point order
    pub fn y_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().map(DataPoint::y)
    }
}

// ============================================================================
// CHART DATA
// ============================================================================

/// X-axis options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct XAxisConfig {
    pub disabled: bool,
    /// X values are epoch milliseconds and get calendar ticks
    pub time_data: bool,
    /// Plotted area extends through the axis strip
    pub extend_area_to_axis: bool,
}

impl XAxisConfig {
    pub fn time() -> Self {
        Self {
            time_data: true,
            ..Default::default()
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.disabled
    }

    pub fn is_time_axis(&self) -> bool {
        !self.disabled && self.time_data
    }
}

/// Everything the metrics computation reads from the host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartData {
    pub series: Vec<Series>,
    pub x_axis: XAxisConfig,
}

impl ChartData {
    pub fn new(series: Vec<Series>, x_axis: XAxisConfig) -> Self {
        Self { series, x_axis }
    }

    /// Parse a JSON chart definition
    pub fn from_json(json: &str) -> Result<Self, MetricsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Total number of points across every series
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.data.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stacked_total_skips_nan() {
        assert_eq!(YValue::Stacked(vec![1.0, 2.5, f64::NAN, 3.5]).total(), 7.0);
        assert_eq!(YValue::Stacked(vec![]).total(), 0.0);
        assert_eq!(YValue::Single(-4.0).total(), -4.0);
    }

    #[test]
    fn test_parse_mixed_point_shapes() {
        let data = ChartData::from_json(
            r#"{
                "series": [
                    {"name": "stacked", "data": [[3, [1, 2]], [1, 4]]},
                    {"data": [5, 6, 7]}
                ],
                "xAxis": {"timeData": true, "extendAreaToAxis": true}
            }"#,
        )
        .unwrap();

        assert_eq!(data.series.len(), 2);
        assert_eq!(data.series[0].name.as_deref(), Some("stacked"));
        assert_eq!(data.series[0].data[0], DataPoint::pair(3.0, vec![1.0, 2.0]));
        assert_eq!(data.series[0].data[1], DataPoint::pair(1.0, 4.0));
        assert_eq!(data.series[1].data[2], DataPoint::Value(7.0));
        assert!(data.x_axis.is_time_axis());
        assert!(data.x_axis.extend_area_to_axis);
        assert_eq!(data.point_count(), 5);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            ChartData::from_json(r#"{"series": [{"data": ["a"]}]}"#),
            Err(MetricsError::Json(_))
        ));
    }

    #[test]
    fn test_sort_by_x() {
        let mut series = Series::from_pairs([(3.0, 30.0), (1.0, 10.0), (2.0, 20.0)]);
        series.sort_by_x();
        let xs: Vec<_> = series.data.iter().filter_map(DataPoint::x).collect();
        assert_eq!(xs, vec![1.0, 2.0, 3.0]);
        assert_eq!(series.x_bounds(), Some((1.0, 3.0)));
    }

    #[test]
    fn test_sort_is_stable_and_idempotent() {
        let mut series = Series::from_pairs([(2.0, 1.0), (1.0, 5.0), (2.0, 2.0), (1.0, 6.0)]);
        series.sort_by_x();
        let once = series.clone();
        series.sort_by_x();
        assert_eq!(series, once);

        let ys: Vec<_> = series.y_values().collect();
        assert_eq!(ys, vec![5.0, 6.0, 1.0, 2.0]);
    }

    #[test]
    fn test_sort_puts_nan_x_last() {
        let mut series = Series::from_pairs([(f64::NAN, 1.0), (4.0, 2.0), (2.0, 3.0)]);
        series.sort_by_x();
        assert_eq!(series.data[0].x(), Some(2.0));
        assert!(series.data[2].x().unwrap().is_nan());
        assert_eq!(series.x_bounds(), Some((2.0, 4.0)));
    }

    #[test]
    fn test_bare_series_has_no_x() {
        let mut series = Series::from_values([3.0, 1.0, 2.0]);
        series.sort_by_x();
        assert!(!series.is_paired());
        assert_eq!(series.x_bounds(), None);
        assert_eq!(series.y_values().collect::<Vec<_>>(), vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_x_axis_flags() {
        assert!(XAxisConfig::default().is_enabled());
        assert!(!XAxisConfig::default().is_time_axis());
        let disabled = XAxisConfig {
            disabled: true,
            time_data: true,
            extend_area_to_axis: false,
        };
        assert!(!disabled.is_time_axis());
    }
}
