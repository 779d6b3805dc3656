//! Calendar collaborators for time-axis ticks.
//!
//! Instants are epoch milliseconds. Range operations follow d3 interval
//! semantics: the first boundary is the ceiling of `start`, every `step`th
//! boundary is returned, and boundaries stop strictly before `end`.

use std::fmt::{Display, Write};

use chrono::{
    DateTime, Datelike, Days, Local, Months, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc,
};
use sachart_core::MetricsError;

const HOUR_MS: i64 = 3_600_000;

// ============================================================================
// STRATEGY PATTERN: Calendar traits
// ============================================================================

/// Fixed-unit bucketing of a time span
pub trait TimeBuckets {
    /// Hour boundaries in `[ceil(start), end)`, every `step` hours
    fn hours(&self, start: i64, end: i64, step: u32) -> Result<Vec<i64>, MetricsError>;

    /// Local midnights in `[ceil(start), end)`, every `step` days
    fn days(&self, start: i64, end: i64, step: u32) -> Result<Vec<i64>, MetricsError>;

    /// First-of-month midnights in `[ceil(start), end)`, every `step` months
    fn months(&self, start: i64, end: i64, step: u32) -> Result<Vec<i64>, MetricsError>;

    fn is_whole_hour(&self, instant: i64) -> Result<bool, MetricsError>;

    fn is_midnight(&self, instant: i64) -> Result<bool, MetricsError>;

    /// Midnight on the 1st of a month
    fn is_month_start(&self, instant: i64) -> Result<bool, MetricsError>;
}

/// Turns an instant into label text using a strftime-style pattern
pub trait TickFormatter {
    fn format(&self, instant: i64, pattern: &str) -> Result<String, MetricsError>;
}

// ============================================================================
// CHRONO CALENDAR
// ============================================================================

/// Calendar backed by chrono, bucketing in the wall-clock time of `Tz`
#[derive(Debug, Clone)]
pub struct ChronoCalendar<Tz: TimeZone = Utc> {
    tz: Tz,
}

impl ChronoCalendar<Utc> {
    pub fn utc() -> Self {
        Self { tz: Utc }
    }
}

impl ChronoCalendar<Local> {
    /// Buckets and labels in the host's local time zone
    pub fn local() -> Self {
        Self { tz: Local }
    }
}

impl Default for ChronoCalendar<Utc> {
    fn default() -> Self {
        Self::utc()
    }
}

impl<Tz: TimeZone> ChronoCalendar<Tz> {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    fn at(&self, instant: i64) -> Result<DateTime<Tz>, MetricsError> {
        self.tz
            .timestamp_millis_opt(instant)
            .single()
            .ok_or(MetricsError::InvalidTimestamp(instant as f64))
    }

    fn wall_clock(&self, instant: i64) -> Result<NaiveDateTime, MetricsError> {
        Ok(self.at(instant)?.naive_local())
    }

    /// Instant of a wall-clock time; inside a DST gap, the hour after it
    fn localize(&self, naive: NaiveDateTime) -> Option<i64> {
        self.tz
            .from_local_datetime(&naive)
            .earliest()
            .or_else(|| {
                let shifted = naive.checked_add_signed(chrono::Duration::hours(1))?;
                self.tz.from_local_datetime(&shifted).earliest()
            })
            .map(|dt| dt.timestamp_millis())
    }

    /// First boundary at or after `start`
    fn ceil(
        &self,
        start: i64,
        floor: impl Fn(NaiveDateTime) -> Option<NaiveDateTime>,
        advance: impl Fn(NaiveDateTime) -> Option<NaiveDateTime>,
    ) -> Result<NaiveDateTime, MetricsError> {
        let local = self.wall_clock(start)?;
        let floored = floor(local).ok_or(MetricsError::InvalidTimestamp(start as f64))?;
        if floored == local {
            return Ok(floored);
        }
        advance(floored).ok_or(MetricsError::InvalidTimestamp(start as f64))
    }

    /// Walk wall-clock boundaries from `first` while they fall before `end`
    fn walk(
        &self,
        first: NaiveDateTime,
        end: i64,
        next: impl Fn(NaiveDateTime) -> Option<NaiveDateTime>,
    ) -> Vec<i64> {
        let mut out: Vec<i64> = Vec::new();
        let mut cursor = Some(first);
        while let Some(naive) = cursor {
            let Some(instant) = self.localize(naive) else {
                break;
            };
            if instant >= end || out.last().is_some_and(|prev| *prev >= instant) {
                break;
            }
            out.push(instant);
            cursor = next(naive);
        }
        out
    }
}

fn midnight(naive: NaiveDateTime) -> Option<NaiveDateTime> {
    Some(naive.date().and_time(NaiveTime::MIN))
}

fn month_start(naive: NaiveDateTime) -> Option<NaiveDateTime> {
    Some(naive.date().with_day(1)?.and_time(NaiveTime::MIN))
}

impl<Tz: TimeZone> TimeBuckets for ChronoCalendar<Tz> {
    fn hours(&self, start: i64, end: i64, step: u32) -> Result<Vec<i64>, MetricsError> {
        if step == 0 {
            return Ok(Vec::new());
        }
        let local = self.at(start)?;
        let into_hour = i64::from(local.minute()) * 60_000
            + i64::from(local.second()) * 1_000
            + i64::from(local.timestamp_subsec_millis());
        let first = if into_hour == 0 {
            start
        } else {
            start - into_hour + HOUR_MS
        };
        let step_ms = HOUR_MS * i64::from(step);

        Ok((0_i64..)
            .map(|i| first + i * step_ms)
            .take_while(|t| *t < end)
            .collect())
    }

    fn days(&self, start: i64, end: i64, step: u32) -> Result<Vec<i64>, MetricsError> {
        if step == 0 {
            return Ok(Vec::new());
        }
        let first = self.ceil(start, midnight, |n| n.checked_add_days(Days::new(1)))?;
        Ok(self.walk(first, end, |n| {
            n.checked_add_days(Days::new(u64::from(step)))
        }))
    }

    fn months(&self, start: i64, end: i64, step: u32) -> Result<Vec<i64>, MetricsError> {
        if step == 0 {
            return Ok(Vec::new());
        }
        let first = self.ceil(start, month_start, |n| {
            n.checked_add_months(Months::new(1))
        })?;
        Ok(self.walk(first, end, |n| n.checked_add_months(Months::new(step))))
    }

    fn is_whole_hour(&self, instant: i64) -> Result<bool, MetricsError> {
        let local = self.wall_clock(instant)?;
        Ok(local.minute() == 0 && local.second() == 0 && local.nanosecond() == 0)
    }

    fn is_midnight(&self, instant: i64) -> Result<bool, MetricsError> {
        Ok(self.wall_clock(instant)?.time() == NaiveTime::MIN)
    }

    fn is_month_start(&self, instant: i64) -> Result<bool, MetricsError> {
        let local = self.wall_clock(instant)?;
        Ok(local.day() == 1 && local.time() == NaiveTime::MIN)
    }
}

impl<Tz: TimeZone> TickFormatter for ChronoCalendar<Tz>
where
    Tz::Offset: Display,
{
    fn format(&self, instant: i64, pattern: &str) -> Result<String, MetricsError> {
        let dt = self.at(instant)?;
        let mut text = String::new();
        write!(text, "{}", dt.format(pattern))
            .map_err(|_| MetricsError::InvalidFormat(pattern.to_string()))?;
        Ok(text)
    }
}
