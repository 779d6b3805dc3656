//! # chartkit
//!
//! Scales that map the computed domains onto the computed pixel ranges.
//! The rendering layer builds these from a [`ChartMetrics`] instead of
//! re-deriving the mapping itself.

use sachart_core::ChartMetrics;

// ============================================================================
// STRATEGY PATTERN: Scale Trait
// ============================================================================

/// Strategy trait for scales (maps domain values to range values)
pub trait Scale: Send + Sync {
    /// Scale a value from domain to range
    fn scale(&self, value: f64) -> f64;

    /// Inverse scale (range to domain)
    fn invert(&self, value: f64) -> f64;

    /// Generate tick values
    fn ticks(&self, count: usize) -> Vec<f64>;
}

// ============================================================================
// LINEAR SCALE
// ============================================================================

/// Linear scale (D3-style continuous scale)
#[derive(Debug, Clone)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
    clamp: bool,
}

impl LinearScale {
    pub fn new() -> Self {
        Self {
            domain: (0.0, 1.0),
            range: (0.0, 1.0),
            clamp: false,
        }
    }

    pub fn domain(mut self, min: f64, max: f64) -> Self {
        self.domain = (min, max);
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = (min, max);
        self
    }

    pub fn clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    pub fn domain_bounds(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range_bounds(&self) -> (f64, f64) {
        self.range
    }

    /// "Nice" tick values (multiples of 1, 2 or 5 times a power of ten)
    /// inside the domain
    pub fn nice_ticks(&self, count: usize) -> Vec<f64> {
        let (min, max) = self.domain;
        if !min.is_finite() || !max.is_finite() {
            return Vec::new();
        }
        let span = max - min;
        if span == 0.0 || count == 0 {
            return vec![min];
        }

        let rough_step = span.abs() / count as f64;
        let magnitude = 10.0_f64.powf(rough_step.log10().floor());
        let residual = rough_step / magnitude;

        let nice_step = if residual <= 1.0 {
            magnitude
        } else if residual <= 2.0 {
            2.0 * magnitude
        } else if residual <= 5.0 {
            5.0 * magnitude
        } else {
            10.0 * magnitude
        };

        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        let first = (lo / nice_step).ceil() as i64;
        let last = (hi / nice_step).floor() as i64;
        (first..=last).map(|i| i as f64 * nice_step).collect()
    }
}

impl Default for LinearScale {
    fn default() -> Self {
        Self::new()
    }
}

impl Scale for LinearScale {
    fn scale(&self, value: f64) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;

        if (d_max - d_min).abs() < f64::EPSILON {
            return (r_min + r_max) / 2.0;
        }

        let mut normalized = (value - d_min) / (d_max - d_min);

        if self.clamp {
            normalized = normalized.clamp(0.0, 1.0);
        }

        r_min + normalized * (r_max - r_min)
    }

    fn invert(&self, value: f64) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;

        if (r_max - r_min).abs() < f64::EPSILON {
            return (d_min + d_max) / 2.0;
        }

        let normalized = (value - r_min) / (r_max - r_min);
        d_min + normalized * (d_max - d_min)
    }

    fn ticks(&self, count: usize) -> Vec<f64> {
        self.nice_ticks(count)
    }
}

// ============================================================================
// METRICS SCALES
// ============================================================================

/// Horizontal scale: x domain onto `[left, left + chart_width]`
pub fn x_scale(metrics: &ChartMetrics) -> LinearScale {
    let [d0, d1] = metrics.x_domain;
    let [r0, r1] = metrics.x_range;
    LinearScale::new().domain(d0, d1).range(r0, r1)
}

/// Vertical scale: y domain onto the inverted pixel range
pub fn y_scale(metrics: &ChartMetrics) -> LinearScale {
    let [d0, d1] = metrics.y_domain;
    let [r0, r1] = metrics.y_range;
    LinearScale::new().domain(d0, d1).range(r0, r1)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_scale() {
        let scale = LinearScale::new().domain(0.0, 100.0).range(0.0, 500.0);

        assert_eq!(scale.scale(0.0), 0.0);
        assert_eq!(scale.scale(50.0), 250.0);
        assert_eq!(scale.scale(100.0), 500.0);
        assert_eq!(scale.invert(250.0), 50.0);
    }

    #[test]
    fn test_inverted_range() {
        let scale = LinearScale::new().domain(0.0, 12.0).range(170.0, 50.0);

        assert_eq!(scale.scale(0.0), 170.0);
        assert_eq!(scale.scale(12.0), 50.0);
        assert_eq!(scale.scale(6.0), 110.0);
    }

    #[test]
    fn test_clamp() {
        let scale = LinearScale::new()
            .domain(0.0, 10.0)
            .range(0.0, 100.0)
            .clamp(true);
        assert_eq!(scale.scale(20.0), 100.0);
        assert_eq!(scale.scale(-5.0), 0.0);
    }

    #[test]
    fn test_nice_ticks() {
        let scale = LinearScale::new().domain(-2.4, 7.2);
        assert_eq!(scale.ticks(5), vec![-2.0, 0.0, 2.0, 4.0, 6.0]);
        assert!(LinearScale::new().domain(f64::NAN, 1.0).ticks(5).is_empty());
    }
}
