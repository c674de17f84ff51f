use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::types::round_millis;
use crate::error::{TimelineError, TimelineResult};

const NAIVE_DATETIME_PATTERNS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Time value as supplied by a host: epoch milliseconds, a date-like text,
/// or a timezone-aware datetime.
///
/// Normalized once at ingestion; everything past the boundary sees `i64` ms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThresholdInput {
    EpochMillis(i64),
    DateTime(DateTime<FixedOffset>),
    Text(String),
}

impl From<i64> for ThresholdInput {
    fn from(value: i64) -> Self {
        Self::EpochMillis(value)
    }
}

impl From<&str> for ThresholdInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ThresholdInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<DateTime<FixedOffset>> for ThresholdInput {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::DateTime(value)
    }
}

impl From<DateTime<Utc>> for ThresholdInput {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value.fixed_offset())
    }
}

/// Converts a host-supplied time into epoch milliseconds.
///
/// Text accepts integer or decimal epoch milliseconds, RFC 3339, and naive
/// `YYYY-MM-DD[ T]HH:MM[:SS[.f]]` / `YYYY-MM-DD` forms read as UTC.
pub fn normalize_threshold(input: &ThresholdInput) -> TimelineResult<i64> {
    match input {
        ThresholdInput::EpochMillis(millis) => Ok(*millis),
        ThresholdInput::DateTime(datetime) => Ok(datetime.timestamp_millis()),
        ThresholdInput::Text(text) => parse_threshold_text(text),
    }
}

/// Like [`normalize_threshold`], keeping `previous` when the input is unusable.
#[must_use]
pub fn normalize_threshold_or(input: &ThresholdInput, previous: i64) -> i64 {
    match normalize_threshold(input) {
        Ok(millis) => millis,
        Err(err) => {
            warn!(error = %err, previous, "unparseable time threshold; keeping previous value");
            previous
        }
    }
}

fn parse_threshold_text(text: &str) -> TimelineResult<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TimelineError::InvalidThreshold(
            "threshold text must not be empty".to_owned(),
        ));
    }

    if let Ok(millis) = trimmed.parse::<i64>() {
        return Ok(millis);
    }
    if let Ok(millis) = trimmed.parse::<f64>() {
        if millis.is_finite() {
            return Ok(round_millis(millis));
        }
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(datetime.timestamp_millis());
    }
    for pattern in NAIVE_DATETIME_PATTERNS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, pattern) {
            return Ok(naive.and_utc().timestamp_millis());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc().timestamp_millis());
        }
    }

    Err(TimelineError::InvalidThreshold(format!(
        "cannot interpret `{trimmed}` as a time"
    )))
}

#[cfg(test)]
mod tests {
    use super::{ThresholdInput, normalize_threshold, normalize_threshold_or};

    #[test]
    fn text_forms_normalize_to_epoch_millis() {
        let cases = [
            ("1690520400000", 1_690_520_400_000),
            ("1690520400000.4", 1_690_520_400_000),
            ("2023-07-28T05:00:00Z", 1_690_520_400_000),
            ("2023-07-28T08:00:00+03:00", 1_690_520_400_000),
            ("2023-07-28 05:00:00", 1_690_520_400_000),
            ("2023-07-28T05:00", 1_690_520_400_000),
            ("1970-01-02", 86_400_000),
        ];
        for (text, expected) in cases {
            let millis = normalize_threshold(&ThresholdInput::from(text)).expect(text);
            assert_eq!(millis, expected, "{text}");
        }
    }

    #[test]
    fn garbage_keeps_previous_value() {
        assert_eq!(
            normalize_threshold_or(&ThresholdInput::from("not a date"), 42),
            42
        );
        assert_eq!(normalize_threshold_or(&ThresholdInput::from("  "), 7), 7);
        assert_eq!(normalize_threshold_or(&ThresholdInput::from("NaN"), 9), 9);
    }
}
