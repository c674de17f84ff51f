use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::types::{MILLIS_PER_DAY, MILLIS_PER_MINUTE};

/// Calendar used for labels and day boundaries, as a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LabelCalendar {
    pub utc_offset_minutes: i32,
}

impl LabelCalendar {
    pub const UTC: Self = Self {
        utc_offset_minutes: 0,
    };

    #[must_use]
    pub fn new(utc_offset_minutes: i32) -> Self {
        Self { utc_offset_minutes }
    }

    /// Offset resolved through chrono; out-of-range offsets fall back to UTC.
    #[must_use]
    pub fn fixed_offset(self) -> FixedOffset {
        let utc = Utc.fix();
        match self.utc_offset_minutes.checked_mul(60) {
            Some(seconds) => FixedOffset::east_opt(seconds).unwrap_or_else(|| {
                warn!(
                    utc_offset_minutes = self.utc_offset_minutes,
                    "label offset out of range; using UTC"
                );
                utc
            }),
            None => utc,
        }
    }

    #[must_use]
    pub fn offset_ms(self) -> i64 {
        i64::from(self.fixed_offset().local_minus_utc()) * 1_000
    }

    /// Epoch milliseconds shifted into this calendar's wall clock.
    #[must_use]
    pub fn local_millis(self, time_ms: i64) -> i64 {
        time_ms.saturating_add(self.offset_ms())
    }

    #[must_use]
    pub fn is_day_boundary(self, time_ms: i64) -> bool {
        self.local_millis(time_ms).rem_euclid(MILLIS_PER_DAY) == 0
    }

    #[must_use]
    pub fn is_multiple_of_minutes(self, time_ms: i64, minutes: i64) -> bool {
        if minutes <= 0 {
            return false;
        }
        let local = self.local_millis(time_ms);
        local.rem_euclid(MILLIS_PER_MINUTE) == 0
            && (local.div_euclid(MILLIS_PER_MINUTE)).rem_euclid(minutes) == 0
    }

    fn datetime(self, time_ms: i64) -> Option<DateTime<FixedOffset>> {
        DateTime::<Utc>::from_timestamp_millis(time_ms)
            .map(|utc| utc.with_timezone(&self.fixed_offset()))
    }

    /// `HH:MM:SS`, used for tick, playhead and hover labels.
    #[must_use]
    pub fn format_clock(self, time_ms: i64) -> String {
        self.format_with(time_ms, "%H:%M:%S")
    }

    /// `YYYY-MM-DD`, used on day-boundary ticks.
    #[must_use]
    pub fn format_date(self, time_ms: i64) -> String {
        self.format_with(time_ms, "%Y-%m-%d")
    }

    fn format_with(self, time_ms: i64, pattern: &str) -> String {
        match self.datetime(time_ms) {
            Some(local) => local.format(pattern).to_string(),
            None => time_ms.to_string(),
        }
    }
}
