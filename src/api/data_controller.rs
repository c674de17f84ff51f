use tracing::{debug, trace};

use crate::core::{
    Interval, IntervalIndex, ThresholdInput, ViewWindow, ZoomPanController,
    hours_for_threshold_span, normalize_threshold_or,
};
use crate::extensions::TimelineEvent;
use crate::interaction::DragPhase;
use crate::render::Renderer;

use super::TimelineEngine;
use super::engine_init::step_forward_ms;

impl<R: Renderer> TimelineEngine<R> {
    /// Replaces the recorded track. Entries must be sorted and disjoint.
    pub fn set_recorded_intervals(&mut self, recorded: Vec<Interval>) {
        let events = self.core.model.intervals.events().to_vec();
        self.replace_intervals(recorded, events);
    }

    /// Replaces the event overlay.
    pub fn set_event_intervals(&mut self, events: Vec<Interval>) {
        let recorded = self.core.model.intervals.recorded().to_vec();
        self.replace_intervals(recorded, events);
    }

    pub fn set_intervals(&mut self, recorded: Vec<Interval>, events: Vec<Interval>) {
        self.replace_intervals(recorded, events);
    }

    fn replace_intervals(&mut self, recorded: Vec<Interval>, events: Vec<Interval>) {
        debug!(
            recorded = recorded.len(),
            events = events.len(),
            "replace interval snapshot"
        );
        self.core.model.intervals = IntervalIndex::new(recorded, events);
    }

    pub fn set_thresholds(
        &mut self,
        start_threshold: impl Into<ThresholdInput>,
        end_threshold: impl Into<ThresholdInput>,
    ) {
        let start = normalize_threshold_or(&start_threshold.into(), self.core.model.start_threshold);
        let end = normalize_threshold_or(&end_threshold.into(), self.core.model.end_threshold);
        self.apply_thresholds(start, end);
    }

    pub fn set_start_threshold(&mut self, start_threshold: impl Into<ThresholdInput>) {
        let start = normalize_threshold_or(&start_threshold.into(), self.core.model.start_threshold);
        self.apply_thresholds(start, self.core.model.end_threshold);
    }

    pub fn set_end_threshold(&mut self, end_threshold: impl Into<ThresholdInput>) {
        let end = normalize_threshold_or(&end_threshold.into(), self.core.model.end_threshold);
        self.apply_thresholds(self.core.model.start_threshold, end);
    }

    /// Re-derives the zoom from the threshold span; a moved start threshold
    /// also becomes the new left edge. The committed time is re-snapped into
    /// the new bounds.
    fn apply_thresholds(&mut self, start_threshold: i64, end_threshold: i64) {
        let start_moved = start_threshold != self.core.model.start_threshold;
        self.core.model.start_threshold = start_threshold;
        self.core.model.end_threshold = end_threshold;

        let window = self.view_window();
        let left_time = if start_moved {
            start_threshold
        } else {
            window.left_time()
        };
        let next = ViewWindow::new(
            left_time,
            hours_for_threshold_span(start_threshold, end_threshold),
            window.canvas_width_px(),
        );
        debug!(start_threshold, end_threshold, "thresholds updated");
        if next != window {
            self.core.model.zoom_pan = ZoomPanController::new(next);
            self.core.interaction.playhead.reproject(next);
            self.emit_visible_window_changed();
        }

        let current = self.current_time();
        if self.snap_time(current) != current {
            self.commit_time(current);
        }
    }

    /// External seek: normalizes, snaps and commits. Unusable input keeps the
    /// current time but still re-snaps it.
    pub fn set_current_time(&mut self, time: impl Into<ThresholdInput>) -> Option<i64> {
        let candidate = normalize_threshold_or(&time.into(), self.current_time());
        self.commit_time(candidate)
    }

    pub fn set_speed_multiplier(&mut self, speed_multiplier: f64) {
        self.core
            .interaction
            .playback
            .set_speed_multiplier(speed_multiplier);
    }

    pub fn set_step_forward_seconds(&mut self, seconds: f64) {
        self.core.interaction.step_forward_ms = step_forward_ms(seconds);
    }

    /// Snaps and commits unless the playhead is mid-scrub, where the pointer
    /// owns it until release.
    pub(super) fn commit_time(&mut self, candidate: i64) -> Option<i64> {
        if self.core.interaction.drag.phase() == DragPhase::DraggingPlayhead {
            trace!(candidate, "commit ignored while scrubbing");
            return None;
        }
        let time = self.snap_time(candidate);
        self.set_committed_time(time);
        Some(time)
    }

    /// Stores an already snapped time and notifies listeners.
    pub(super) fn set_committed_time(&mut self, time: i64) {
        let window = self.view_window();
        let playhead = &mut self.core.interaction.playhead;
        playhead.current_time = time;
        playhead.reproject(window);
        debug!(time, "time committed");
        self.emit_listener_event(TimelineEvent::TimeCommitted { time });
    }
}
