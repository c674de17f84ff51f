use crate::core::{
    IntervalIndex, LabelCalendar, MidpointTieBreak, SnapBounds, TimeSnapper, ViewWindow, Viewport,
};
use crate::interaction::{DragPhase, HoverIndicator, PlayheadState};
use crate::render::Renderer;

use super::TimelineEngine;

impl<R: Renderer> TimelineEngine<R> {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.core.model.viewport
    }

    #[must_use]
    pub fn view_window(&self) -> ViewWindow {
        self.core.model.zoom_pan.window()
    }

    #[must_use]
    pub fn intervals(&self) -> &IntervalIndex {
        &self.core.model.intervals
    }

    /// `(start, end)` thresholds in epoch ms.
    #[must_use]
    pub fn thresholds(&self) -> (i64, i64) {
        (self.core.model.start_threshold, self.core.model.end_threshold)
    }

    #[must_use]
    pub fn midpoint_tie_break(&self) -> MidpointTieBreak {
        self.core.model.tie_break
    }

    pub fn set_midpoint_tie_break(&mut self, tie_break: MidpointTieBreak) {
        self.core.model.tie_break = tie_break;
    }

    #[must_use]
    pub fn label_calendar(&self) -> LabelCalendar {
        self.core.presentation.calendar
    }

    #[must_use]
    pub fn playhead(&self) -> PlayheadState {
        self.core.interaction.playhead
    }

    #[must_use]
    pub fn current_time(&self) -> i64 {
        self.core.interaction.playhead.current_time
    }

    #[must_use]
    pub fn hover(&self) -> Option<HoverIndicator> {
        self.core.interaction.hover
    }

    #[must_use]
    pub fn drag_phase(&self) -> DragPhase {
        self.core.interaction.drag.phase()
    }

    #[must_use]
    pub fn step_forward_ms(&self) -> i64 {
        self.core.interaction.step_forward_ms
    }

    #[must_use]
    pub fn map_time_to_pixel(&self, time: i64) -> f64 {
        self.view_window().time_to_pixel(time)
    }

    #[must_use]
    pub fn map_pixel_to_time(&self, pixel: f64) -> i64 {
        self.view_window().pixel_to_time_ms(pixel)
    }

    /// Rest limits as of the engine clock's "now".
    #[must_use]
    pub fn snap_bounds(&self) -> SnapBounds {
        SnapBounds::new(
            self.core.model.start_threshold,
            self.core.model.end_threshold,
            self.core.runtime.clock.now_ms(),
        )
    }

    /// Where the playhead would rest if `candidate` were committed now.
    #[must_use]
    pub fn snap_time(&self, candidate: i64) -> i64 {
        TimeSnapper::new(
            &self.core.model.intervals,
            self.snap_bounds(),
            self.core.model.tie_break,
        )
        .snap(candidate)
    }
}
