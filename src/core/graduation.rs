use serde::{Deserialize, Serialize};

use crate::core::time_format::LabelCalendar;
use crate::core::types::MILLIS_PER_MINUTE;
use crate::core::view_window::ViewWindow;

/// Candidate tick intervals in minutes, finest first.
pub const MINUTES_PER_STEP: [i64; 14] = [
    1, 2, 5, 10, 15, 20, 30, 60, 120, 180, 240, 360, 720, 1440,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraduationTier {
    Major,
    Medium,
    Minor,
}

/// One tick mark on the ruler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graduation {
    pub pixel_x: f64,
    pub time: i64,
    pub tier: GraduationTier,
    pub label: Option<String>,
}

/// Minimum on-screen spacing for ticks and for labelled ticks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraduationConfig {
    pub min_graduation_gap_px: f64,
    pub label_gap_px: f64,
}

impl Default for GraduationConfig {
    fn default() -> Self {
        Self {
            min_graduation_gap_px: 20.0,
            label_gap_px: 80.0,
        }
    }
}

impl GraduationConfig {
    /// Replaces non-finite or non-positive gaps with the defaults.
    #[must_use]
    pub fn coerced(self) -> Self {
        let defaults = Self::default();
        let pick = |value: f64, fallback: f64| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                fallback
            }
        };
        Self {
            min_graduation_gap_px: pick(self.min_graduation_gap_px, defaults.min_graduation_gap_px),
            label_gap_px: pick(self.label_gap_px, defaults.label_gap_px),
        }
    }
}

/// Step choice and first-tick alignment for one window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraduationLayout {
    pub minor_step_minutes: i64,
    pub label_step_minutes: i64,
    pub step_px: f64,
    pub step_ms: i64,
    pub offset_ms: i64,
    pub tick_count: usize,
}

/// Smallest table step at least `min_gap_px` wide; the coarsest step when none is.
#[must_use]
pub fn select_step_minutes(pixels_per_minute: f64, min_gap_px: f64) -> i64 {
    MINUTES_PER_STEP
        .iter()
        .copied()
        .find(|step| (*step as f64) * pixels_per_minute >= min_gap_px)
        .unwrap_or(MINUTES_PER_STEP[MINUTES_PER_STEP.len() - 1])
}

/// Milliseconds from `time` forward to the next multiple of `step_ms`; zero when aligned.
#[must_use]
pub fn ms_to_next_step(time: i64, step_ms: i64) -> i64 {
    let remainder = time.rem_euclid(step_ms);
    if remainder == 0 { 0 } else { step_ms - remainder }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraduationGenerator {
    config: GraduationConfig,
    calendar: LabelCalendar,
}

impl GraduationGenerator {
    #[must_use]
    pub fn new(config: GraduationConfig, calendar: LabelCalendar) -> Self {
        Self {
            config: config.coerced(),
            calendar,
        }
    }

    #[must_use]
    pub fn layout(&self, window: ViewWindow) -> GraduationLayout {
        let width = window.canvas_width_px();
        let pixels_per_minute = width / (window.hours_per_ruler() * 60.0);

        let minor_step_minutes =
            select_step_minutes(pixels_per_minute, self.config.min_graduation_gap_px);
        let label_step_minutes = select_step_minutes(pixels_per_minute, self.config.label_gap_px);
        let step_ms = minor_step_minutes * MILLIS_PER_MINUTE;
        let step_px = minor_step_minutes as f64 * pixels_per_minute;
        let local_left = self.calendar.local_millis(window.left_time());

        GraduationLayout {
            minor_step_minutes,
            label_step_minutes,
            step_px,
            step_ms,
            offset_ms: ms_to_next_step(local_left, step_ms),
            tick_count: (width / step_px).ceil() as usize,
        }
    }

    /// Ticks for the window, left to right.
    #[must_use]
    pub fn generate(&self, window: ViewWindow) -> Graduations {
        let layout = self.layout(window);
        Graduations {
            layout,
            calendar: self.calendar,
            first_time: window.left_time().saturating_add(layout.offset_ms),
            first_px: layout.offset_ms as f64 * window.pixels_per_ms(),
            next: 0,
        }
    }
}

/// Single-pass tick sequence produced by [`GraduationGenerator::generate`].
#[derive(Debug, Clone)]
pub struct Graduations {
    layout: GraduationLayout,
    calendar: LabelCalendar,
    first_time: i64,
    first_px: f64,
    next: usize,
}

impl Graduations {
    #[must_use]
    pub fn layout(&self) -> GraduationLayout {
        self.layout
    }

    fn graduation_at(&self, index: usize) -> Graduation {
        let time = self
            .first_time
            .saturating_add((index as i64).saturating_mul(self.layout.step_ms));
        let pixel_x = self.first_px + index as f64 * self.layout.step_px;

        let (tier, label) = if self.calendar.is_day_boundary(time) {
            (GraduationTier::Major, Some(self.calendar.format_date(time)))
        } else if self
            .calendar
            .is_multiple_of_minutes(time, self.layout.label_step_minutes)
        {
            (GraduationTier::Medium, Some(self.calendar.format_clock(time)))
        } else {
            (GraduationTier::Minor, None)
        };

        Graduation {
            pixel_x,
            time,
            tier,
            label,
        }
    }
}

impl Iterator for Graduations {
    type Item = Graduation;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.layout.tick_count {
            return None;
        }
        let graduation = self.graduation_at(self.next);
        self.next += 1;
        Some(graduation)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.layout.tick_count.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Graduations {}
