//! Chart dimensions: the partial input a host supplies and the resolved form.

use serde::{Deserialize, Serialize};

// ============================================================================
// PARTIAL INPUT
// ============================================================================

/// Margin specification where any side may be left unset.
///
/// `None` means "unset" and is distinct from an explicit `Some(0.0)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarginsSpec {
    pub top: Option<f64>,
    pub left: Option<f64>,
    pub bottom: Option<f64>,
    pub right: Option<f64>,
}

impl MarginsSpec {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top: Some(top),
            left: Some(left),
            bottom: Some(bottom),
            right: Some(right),
        }
    }
}

/// Possibly-partial size and margin specification
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DimensionsSpec {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub margins: Option<MarginsSpec>,
}

impl DimensionsSpec {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            margins: None,
        }
    }

    pub fn with_margins(mut self, margins: MarginsSpec) -> Self {
        self.margins = Some(margins);
        self
    }
}

// ============================================================================
// RESOLVED DIMENSIONS
// ============================================================================

/// Chart margin configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl ChartMargin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    pub const fn uniform(margin: f64) -> Self {
        Self::new(margin, margin, margin, margin)
    }
}

impl Default for ChartMargin {
    fn default() -> Self {
        Self::uniform(50.0)
    }
}

/// Fully resolved chart dimensions, every field defined
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartDimensions {
    pub width: f64,
    pub height: f64,
    pub margin: ChartMargin,
}

impl ChartDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: ChartMargin::default(),
        }
    }

    pub fn with_margin(mut self, margin: ChartMargin) -> Self {
        self.margin = margin;
        self
    }

    /// Width between the left and right margins (may be negative)
    pub fn inner_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    /// Height between the top and bottom margins (may be negative)
    pub fn inner_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_extents() {
        let dims = ChartDimensions::new(400.0, 160.0)
            .with_margin(ChartMargin::new(10.0, 20.0, 30.0, 40.0));
        assert_eq!(dims.inner_width(), 340.0);
        assert_eq!(dims.inner_height(), 120.0);
    }

    #[test]
    fn test_margins_spec_keeps_explicit_zero() {
        let spec: MarginsSpec = serde_json::from_str(r#"{"left": 0, "top": 12}"#).unwrap();
        assert_eq!(spec.left, Some(0.0));
        assert_eq!(spec.top, Some(12.0));
        assert_eq!(spec.right, None);
        assert_eq!(spec.bottom, None);
    }

    #[test]
    fn test_dimensions_spec_partial_json() {
        let spec: DimensionsSpec = serde_json::from_str(r#"{"width": 640}"#).unwrap();
        assert_eq!(spec.width, Some(640.0));
        assert!(spec.height.is_none());
        assert!(spec.margins.is_none());
    }
}
