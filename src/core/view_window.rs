use serde::{Deserialize, Serialize};

use crate::core::types::{MILLIS_PER_HOUR, round_millis};

pub const MIN_HOURS_PER_RULER: f64 = 0.5;
pub const MAX_HOURS_PER_RULER: f64 = 24.0;

/// Visible slice of the time axis.
///
/// `pixels_per_ms` is always `canvas_width_px / (hours_per_ruler * 3_600_000)`.
/// The zoom level is clamped into `[0.5, 24]` hours, so the scale factor is
/// strictly positive and the time/pixel mapping below is total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewWindow {
    left_time: i64,
    hours_per_ruler: f64,
    pixels_per_ms: f64,
    canvas_width_px: f64,
}

impl ViewWindow {
    #[must_use]
    pub fn new(left_time: i64, hours_per_ruler: f64, canvas_width_px: f64) -> Self {
        let hours_per_ruler = clamp_hours_per_ruler(hours_per_ruler);
        let canvas_width_px = coerce_canvas_width(canvas_width_px);
        Self {
            left_time,
            hours_per_ruler,
            pixels_per_ms: pixels_per_ms_for(canvas_width_px, hours_per_ruler),
            canvas_width_px,
        }
    }

    #[must_use]
    pub fn left_time(self) -> i64 {
        self.left_time
    }

    #[must_use]
    pub fn hours_per_ruler(self) -> f64 {
        self.hours_per_ruler
    }

    #[must_use]
    pub fn pixels_per_ms(self) -> f64 {
        self.pixels_per_ms
    }

    #[must_use]
    pub fn canvas_width_px(self) -> f64 {
        self.canvas_width_px
    }

    #[must_use]
    pub fn visible_span_ms(self) -> f64 {
        self.canvas_width_px / self.pixels_per_ms
    }

    /// Time at the right edge of the canvas, rounded to whole milliseconds.
    #[must_use]
    pub fn right_time(self) -> i64 {
        self.left_time
            .saturating_add(round_millis(self.visible_span_ms()))
    }

    #[must_use]
    pub fn center_time(self) -> f64 {
        self.pixel_to_time(self.canvas_width_px / 2.0)
    }

    #[must_use]
    pub fn time_to_pixel(self, time: i64) -> f64 {
        (time as f64 - self.left_time as f64) * self.pixels_per_ms
    }

    #[must_use]
    pub fn pixel_to_time(self, pixel: f64) -> f64 {
        self.left_time as f64 + pixel / self.pixels_per_ms
    }

    /// Same as [`Self::pixel_to_time`] rounded to integer milliseconds.
    #[must_use]
    pub fn pixel_to_time_ms(self, pixel: f64) -> i64 {
        round_millis(self.pixel_to_time(pixel))
    }

    #[must_use]
    pub fn contains_time(self, time: i64) -> bool {
        time >= self.left_time && time <= self.right_time()
    }

    pub(crate) fn set_left_time(&mut self, left_time: i64) {
        self.left_time = left_time;
    }

    pub(crate) fn set_hours_per_ruler(&mut self, hours_per_ruler: f64) {
        self.hours_per_ruler = clamp_hours_per_ruler(hours_per_ruler);
        self.pixels_per_ms = pixels_per_ms_for(self.canvas_width_px, self.hours_per_ruler);
    }

    pub(crate) fn set_canvas_width_px(&mut self, canvas_width_px: f64) {
        self.canvas_width_px = coerce_canvas_width(canvas_width_px);
        self.pixels_per_ms = pixels_per_ms_for(self.canvas_width_px, self.hours_per_ruler);
    }
}

#[must_use]
pub fn clamp_hours_per_ruler(hours_per_ruler: f64) -> f64 {
    if !hours_per_ruler.is_finite() {
        return MAX_HOURS_PER_RULER;
    }
    hours_per_ruler.clamp(MIN_HOURS_PER_RULER, MAX_HOURS_PER_RULER)
}

/// Initial zoom for a threshold range: the span itself when it rounds up to
/// less than a day, else a full day.
#[must_use]
pub fn hours_for_threshold_span(start_threshold: i64, end_threshold: i64) -> f64 {
    let span_hours = end_threshold.saturating_sub(start_threshold) as f64 / MILLIS_PER_HOUR as f64;
    if span_hours.ceil() < MAX_HOURS_PER_RULER {
        clamp_hours_per_ruler((span_hours * 100_000.0).round() / 100_000.0)
    } else {
        MAX_HOURS_PER_RULER
    }
}

fn coerce_canvas_width(canvas_width_px: f64) -> f64 {
    if canvas_width_px.is_finite() && canvas_width_px >= 1.0 {
        canvas_width_px
    } else {
        1.0
    }
}

fn pixels_per_ms_for(canvas_width_px: f64, hours_per_ruler: f64) -> f64 {
    canvas_width_px / (hours_per_ruler * MILLIS_PER_HOUR as f64)
}
