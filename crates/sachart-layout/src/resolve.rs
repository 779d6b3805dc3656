//! Dimension resolution: fill a partial size/margin spec from the measured
//! surface width and the layout defaults.

use sachart_core::{ChartDimensions, ChartMargin, DimensionsSpec};

use crate::config::LayoutConfig;

/// Normalizes partial dimensions into complete ones
#[derive(Debug, Clone)]
pub struct DimensionResolver {
    fallback_width: f64,
    height_ratio: f64,
    default_margin: f64,
}

impl DimensionResolver {
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            fallback_width: config.fallback_width,
            height_ratio: config.height_ratio,
            default_margin: config.default_margin,
        }
    }

    /// Resolve `dims` against `measured_width`.
    ///
    /// An unavailable (or non-finite) measurement falls back to the configured
    /// width. Unset or zero width/height are defaulted; margin sides are only
    /// defaulted when unset, so an explicit 0 is kept.
    pub fn resolve(
        &self,
        measured_width: Option<f64>,
        dims: Option<&DimensionsSpec>,
    ) -> ChartDimensions {
        let measured = measured_width
            .filter(|w| w.is_finite())
            .unwrap_or(self.fallback_width);
        let defaults = ChartMargin::uniform(self.default_margin);

        let Some(spec) = dims else {
            return ChartDimensions::new(measured, measured * self.height_ratio)
                .with_margin(defaults);
        };

        let width = spec.width.filter(|w| is_set(*w)).unwrap_or(measured);
        let height = spec
            .height
            .filter(|h| is_set(*h))
            .unwrap_or(width * self.height_ratio);

        let margin = match spec.margins {
            None => defaults,
            Some(m) => ChartMargin::new(
                m.top.unwrap_or(defaults.top),
                m.right.unwrap_or(defaults.right),
                m.bottom.unwrap_or(defaults.bottom),
                m.left.unwrap_or(defaults.left),
            ),
        };

        let resolved = ChartDimensions::new(width, height).with_margin(margin);
        tracing::debug!(?resolved, "resolved chart dimensions");
        resolved
    }
}

impl Default for DimensionResolver {
    fn default() -> Self {
        Self::new(&LayoutConfig::default())
    }
}

/// Zero and NaN sizes count as unset
fn is_set(v: f64) -> bool {
    v != 0.0 && !v.is_nan()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sachart_core::MarginsSpec;

    #[test]
    fn test_absent_dims_use_measured_width() {
        let dims = DimensionResolver::default().resolve(Some(500.0), None);
        assert_eq!(dims.width, 500.0);
        assert_eq!(dims.height, 200.0);
        assert_eq!(dims.margin, ChartMargin::uniform(50.0));
    }

    #[test]
    fn test_unmeasured_falls_back_to_300() {
        let resolver = DimensionResolver::default();
        for measured in [None, Some(f64::NAN), Some(f64::INFINITY)] {
            let dims = resolver.resolve(measured, None);
            assert_eq!(dims.width, 300.0);
            assert_eq!(dims.height, 120.0);
        }
    }

    #[test]
    fn test_missing_height_derives_from_given_width() {
        let spec = DimensionsSpec {
            width: Some(1000.0),
            ..Default::default()
        };
        let dims = DimensionResolver::default().resolve(Some(200.0), Some(&spec));
        assert_eq!(dims.width, 1000.0);
        assert_eq!(dims.height, 400.0);
    }

    #[test]
    fn test_zero_width_is_defaulted() {
        let spec = DimensionsSpec {
            width: Some(0.0),
            height: Some(90.0),
            margins: None,
        };
        let dims = DimensionResolver::default().resolve(Some(250.0), Some(&spec));
        assert_eq!(dims.width, 250.0);
        assert_eq!(dims.height, 90.0);
    }

    #[test]
    fn test_partial_margins_keep_explicit_zero() {
        let spec = DimensionsSpec::new(800.0, 300.0).with_margins(MarginsSpec {
            left: Some(0.0),
            top: Some(10.0),
            ..Default::default()
        });
        let dims = DimensionResolver::default().resolve(None, Some(&spec));
        assert_eq!(dims.margin, ChartMargin::new(10.0, 50.0, 50.0, 0.0));
    }

    #[test]
    fn test_resolved_fields_always_defined() {
        let resolver = DimensionResolver::new(&LayoutConfig::default().with_default_margin(20.0));
        let specs = [
            DimensionsSpec::default(),
            DimensionsSpec::new(f64::NAN, f64::NAN),
            DimensionsSpec::default().with_margins(MarginsSpec::default()),
            DimensionsSpec::new(640.0, 0.0).with_margins(MarginsSpec::new(1.0, 2.0, 3.0, 4.0)),
        ];
        for measured in [None, Some(120.0)] {
            for spec in &specs {
                let dims = resolver.resolve(measured, Some(spec));
                for v in [
                    dims.width,
                    dims.height,
                    dims.margin.top,
                    dims.margin.right,
                    dims.margin.bottom,
                    dims.margin.left,
                ] {
                    assert!(v.is_finite(), "{spec:?} resolved to {dims:?}");
                }
            }
        }
    }
}
