use tracing::trace;

use crate::core::types::round_millis;
use crate::core::view_window::{ViewWindow, clamp_hours_per_ruler};

/// Sole writer of the [`ViewWindow`].
///
/// All inputs are coerced; none of the operations can fail. Pan range is not
/// bounded here: the playhead rest bounds live in the snapper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomPanController {
    window: ViewWindow,
}

impl ZoomPanController {
    #[must_use]
    pub fn new(window: ViewWindow) -> Self {
        Self { window }
    }

    #[must_use]
    pub fn window(&self) -> ViewWindow {
        self.window
    }

    /// Applies one wheel notch. Positive `delta_y` zooms out (more hours per
    /// ruler), negative zooms in. Returns `true` when the window changed.
    pub fn apply_wheel(&mut self, delta_y: f64) -> bool {
        if !delta_y.is_finite() || delta_y == 0.0 {
            return false;
        }
        let current = self.window.hours_per_ruler();
        let step = zoom_step_hours(current);
        let target = if delta_y > 0.0 {
            current + step
        } else {
            current - step
        };
        self.zoom_to_hours(target)
    }

    /// Sets the zoom level while keeping the time under the canvas center fixed.
    pub fn zoom_to_hours(&mut self, hours_per_ruler: f64) -> bool {
        let current = self.window.hours_per_ruler();
        let target = clamp_hours_per_ruler(hours_per_ruler);
        if (target - current).abs() <= f64::EPSILON {
            return false;
        }

        let half_width = self.window.canvas_width_px() / 2.0;
        let center_time = self.window.pixel_to_time(half_width);
        self.window.set_hours_per_ruler(target);
        let left_time = round_millis(center_time - half_width / self.window.pixels_per_ms());
        self.window.set_left_time(left_time);
        trace!(
            hours_per_ruler = target,
            left_time, "zoomed around canvas center"
        );
        true
    }

    /// Scrolls the ruler by a pointer delta; dragging right moves back in time.
    pub fn apply_pan(&mut self, delta_x_px: f64) -> bool {
        if !delta_x_px.is_finite() || delta_x_px == 0.0 {
            return false;
        }
        let delta_ms = round_millis(delta_x_px / self.window.pixels_per_ms());
        if delta_ms == 0 {
            return false;
        }
        let left_time = self.window.left_time().saturating_sub(delta_ms);
        self.window.set_left_time(left_time);
        true
    }

    /// Recomputes the scale for a new canvas width; the left edge stays pinned.
    pub fn apply_resize(&mut self, canvas_width_px: f64) -> bool {
        let before = self.window.canvas_width_px();
        self.window.set_canvas_width_px(canvas_width_px);
        (self.window.canvas_width_px() - before).abs() > f64::EPSILON
    }
}

/// One notch is a full hour once the ruler spans at least an hour, else half an hour.
#[must_use]
pub fn zoom_step_hours(hours_per_ruler: f64) -> f64 {
    if hours_per_ruler >= 1.0 { 1.0 } else { 0.5 }
}
