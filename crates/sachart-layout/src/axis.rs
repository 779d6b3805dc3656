//! Time-axis tick generation.
//!
//! Picks a bucketing regime from the span of the x domain, builds candidate
//! instants on that regime's calendar boundaries, then thins them so labels
//! of a fixed assumed footprint do not overlap.

use sachart_core::{MAX_INSTANT_MS, MS_PER_DAY, MetricsError, TickDescriptor};

use crate::calendar::{ChronoCalendar, TickFormatter, TimeBuckets};
use crate::config::LayoutConfig;

// ============================================================================
// REGIME
// ============================================================================

/// Tick granularity for a time span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// Hour boundaries, labelled `09:00 AM`
    Hourly,
    /// Every seventh midnight, labelled `Jan 21`
    WeeklyByDay,
    /// First of each month, labelled `Jan 2017`
    Monthly,
}

impl Regime {
    /// Regime for a span measured in days
    pub fn for_span(span_days: f64, config: &LayoutConfig) -> Self {
        if span_days < config.hourly_max_days {
            Self::Hourly
        } else if span_days < config.weekly_max_days {
            Self::WeeklyByDay
        } else {
            Self::Monthly
        }
    }

    /// Label pattern
    pub fn pattern(&self) -> &'static str {
        match self {
            Self::Hourly => "%I:%M %p",
            Self::WeeklyByDay => "%b %d",
            Self::Monthly => "%b %Y",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::WeeklyByDay => "weekly-by-day",
            Self::Monthly => "monthly",
        }
    }
}

// ============================================================================
// THINNING
// ============================================================================

/// Indices kept when thinning `count` candidates into `chart_width` pixels.
///
/// First and last are always kept; the rest only when their index is a
/// multiple of the skip count. A skip count of 0 (everything fits) keeps all;
/// a chart too narrow for even one label keeps only the ends.
pub fn thinned_indices(count: usize, chart_width: f64, footprint: f64) -> Vec<usize> {
    let possible_labels = ((chart_width - footprint) / footprint).floor();
    let skip = if possible_labels.is_nan() || possible_labels < 1.0 {
        None
    } else {
        Some((count as f64 / possible_labels).floor() as usize)
    };

    (0..count)
        .filter(|&i| {
            i == 0
                || i + 1 == count
                || match skip {
                    None => false,
                    Some(0) => true,
                    Some(skip) => i % skip == 0,
                }
        })
        .collect()
}

// ============================================================================
// AXIS GENERATOR
// ============================================================================

/// Builds time-axis ticks from a calendar collaborator
#[derive(Debug, Clone)]
pub struct AxisGenerator<C = ChronoCalendar> {
    calendar: C,
    config: LayoutConfig,
}

impl Default for AxisGenerator {
    fn default() -> Self {
        Self::new(ChronoCalendar::default(), LayoutConfig::default())
    }
}

impl<C: TimeBuckets + TickFormatter> AxisGenerator<C> {
    pub fn new(calendar: C, config: LayoutConfig) -> Self {
        Self { calendar, config }
    }

    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    /// Candidate instants for `regime`, before thinning.
    ///
    /// Off-boundary starts are prepended, the end is always appended.
    pub fn candidates(
        &self,
        regime: Regime,
        start: i64,
        end: i64,
    ) -> Result<Vec<i64>, MetricsError> {
        let cal = &self.calendar;
        let (on_boundary, boundaries) = match regime {
            Regime::Hourly => (cal.is_whole_hour(start)?, cal.hours(start, end, 1)?),
            Regime::WeeklyByDay => (
                cal.is_midnight(start)?,
                cal.days(start, end, self.config.weekly_step_days)?,
            ),
            Regime::Monthly => (cal.is_month_start(start)?, cal.months(start, end, 1)?),
        };

        let mut range = Vec::with_capacity(boundaries.len() + 2);
        if !on_boundary {
            range.push(start);
        }
        range.extend(boundaries);
        range.push(end);
        // a zero-length span yields start == end
        range.dedup();
        Ok(range)
    }

    /// Ticks for the domain `[x_min, x_max]` (epoch ms) on a chart
    /// `chart_width` pixels wide, ascending by `x`.
    pub fn generate(
        &self,
        x_min: f64,
        x_max: f64,
        chart_width: f64,
    ) -> Result<Vec<TickDescriptor>, MetricsError> {
        let start = to_instant(x_min)?;
        let end = to_instant(x_max)?;

        let span_days = (x_max - x_min) / MS_PER_DAY;
        let regime = Regime::for_span(span_days, &self.config);
        let range = self.candidates(regime, start, end)?;

        let kept = thinned_indices(range.len(), chart_width, self.config.label_footprint);
        tracing::debug!(
            regime = regime.label(),
            span_days,
            candidates = range.len(),
            kept = kept.len(),
            "generated time axis"
        );

        kept.into_iter()
            .map(|i| {
                let instant = range[i];
                let text = self.calendar.format(instant, regime.pattern())?;
                Ok(TickDescriptor::new(text, instant as f64))
            })
            .collect()
    }
}

/// Whole-millisecond instant, truncated toward zero like a JS `Date`
fn to_instant(x: f64) -> Result<i64, MetricsError> {
    if !x.is_finite() || x.abs() > MAX_INSTANT_MS {
        tracing::warn!(x, "timestamp outside the calendar range");
        return Err(MetricsError::InvalidTimestamp(x));
    }
    Ok(x.trunc() as i64)
}
