//! Error type for metrics computation

use thiserror::Error;

/// Failures surfaced while turning chart data into metrics
#[derive(Debug, Error)]
pub enum MetricsError {
    /// No series contributed a y value, so there is no value domain
    #[error("chart data has no y values")]
    EmptyDataset,

    /// A time axis was requested but no series carries `[x, y]` pairs
    #[error("time axis requested but no series carries x values")]
    MissingTimeDomain,

    /// Instant is not finite or falls outside the representable calendar
    #[error("timestamp {0} cannot be placed on the calendar")]
    InvalidTimestamp(f64),

    /// Label pattern rejected by the formatter
    #[error("invalid label format pattern: {0:?}")]
    InvalidFormat(String),

    /// Chart definition could not be parsed
    #[error("invalid chart data: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MetricsError::EmptyDataset.to_string(),
            "chart data has no y values"
        );
        assert_eq!(
            MetricsError::InvalidTimestamp(f64::INFINITY).to_string(),
            "timestamp inf cannot be placed on the calendar"
        );
    }

    #[test]
    fn test_json_error_converts() {
        let err: MetricsError = serde_json::from_str::<Vec<f64>>("[1,")
            .unwrap_err()
            .into();
        assert!(matches!(err, MetricsError::Json(_)));
    }
}
