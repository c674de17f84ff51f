use serde::{Deserialize, Serialize};

pub const MILLIS_PER_SECOND: i64 = 1_000;
pub const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
pub const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Canvas size in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Returns a copy with zero dimensions raised to one pixel.
    #[must_use]
    pub fn coerced(self) -> Self {
        Self {
            width: self.width.max(1),
            height: self.height.max(1),
        }
    }

    /// Unit length the timeline glyphs are proportioned against.
    #[must_use]
    pub fn scale_unit(self) -> f64 {
        f64::from(self.height) / 4.55
    }
}

/// Rounds a float time to integer milliseconds, saturating at the `i64` range.
///
/// Non-finite input maps to `0`.
#[must_use]
pub fn round_millis(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    let rounded = value.round();
    if rounded >= i64::MAX as f64 {
        i64::MAX
    } else if rounded <= i64::MIN as f64 {
        i64::MIN
    } else {
        rounded as i64
    }
}

#[cfg(test)]
mod tests {
    use super::{Viewport, round_millis};

    #[test]
    fn coerced_viewport_never_has_zero_extent() {
        let viewport = Viewport::new(0, 0).coerced();
        assert!(viewport.is_valid());
    }

    #[test]
    fn round_millis_saturates_and_maps_nan_to_zero() {
        assert_eq!(round_millis(f64::NAN), 0);
        assert_eq!(round_millis(1e30), i64::MAX);
        assert_eq!(round_millis(-1e30), i64::MIN);
        assert_eq!(round_millis(-2.5), -3);
    }
}
