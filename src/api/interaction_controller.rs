use tracing::{debug, trace};

use crate::core::{TimeSnapper, Viewport};
use crate::extensions::TimelineEvent;
use crate::interaction::{DragOutcome, KeyCommand, PlayheadGlyph, TimelineKey};
use crate::render::Renderer;

use super::TimelineEngine;

impl<R: Renderer> TimelineEngine<R> {
    #[must_use]
    pub fn playhead_glyph(&self) -> PlayheadGlyph {
        PlayheadGlyph::new(self.core.model.viewport)
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.core.interaction.hover = None;
        let bounds = self.snap_bounds();
        let window = self.view_window();
        let snapper = TimeSnapper::new(
            &self.core.model.intervals,
            bounds,
            self.core.model.tie_break,
        );
        let outcome = self.core.interaction.drag.pointer_down(
            x,
            y,
            window,
            &mut self.core.interaction.playhead,
            &snapper,
        );
        self.apply_drag_outcome(outcome);
    }

    pub fn pointer_move(&mut self, x: f64, _y: f64) {
        let glyph = self.playhead_glyph();
        let outcome = self.core.interaction.drag.pointer_move(
            x,
            &mut self.core.model.zoom_pan,
            &mut self.core.interaction.playhead,
            glyph,
        );
        self.apply_drag_outcome(outcome);
    }

    pub fn pointer_up(&mut self, x: f64, _y: f64) {
        let bounds = self.snap_bounds();
        let window = self.view_window();
        let snapper = TimeSnapper::new(
            &self.core.model.intervals,
            bounds,
            self.core.model.tie_break,
        );
        let outcome = self.core.interaction.drag.pointer_up(
            x,
            window,
            &mut self.core.interaction.playhead,
            &snapper,
        );
        self.apply_drag_outcome(outcome);
    }

    /// Pointer left the canvas: clears the hover readout and settles any
    /// gesture in progress.
    pub fn pointer_leave(&mut self) {
        self.core.interaction.hover = None;
        let bounds = self.snap_bounds();
        let window = self.view_window();
        let snapper = TimeSnapper::new(
            &self.core.model.intervals,
            bounds,
            self.core.model.tie_break,
        );
        let outcome = self.core.interaction.drag.pointer_leave(
            window,
            &mut self.core.interaction.playhead,
            &snapper,
        );
        self.apply_drag_outcome(outcome);
    }

    /// One wheel notch; positive `delta_y` zooms out around the canvas center.
    pub fn wheel(&mut self, delta_y: f64) {
        if !self.core.model.zoom_pan.apply_wheel(delta_y) {
            return;
        }
        let window = self.view_window();
        self.core.interaction.playhead.reproject(window);
        debug!(
            hours_per_ruler = window.hours_per_ruler(),
            left_time = window.left_time(),
            "zoom changed"
        );
        self.emit_visible_window_changed();
    }

    /// Host canvas resized. The left edge stays fixed; the span follows the
    /// configured hours.
    pub fn resize(&mut self, width: u32, height: u32) {
        let viewport = Viewport::new(width, height).coerced();
        let previous = self.core.model.viewport;
        self.core.model.viewport = viewport;
        let width_changed = self
            .core
            .model
            .zoom_pan
            .apply_resize(f64::from(viewport.width));
        if viewport != previous {
            debug!(width = viewport.width, height = viewport.height, "canvas resized");
        }
        if width_changed {
            let window = self.view_window();
            self.core.interaction.playhead.reproject(window);
            self.emit_visible_window_changed();
        }
    }

    /// Handles a key by DOM-style name. Returns `false` for keys the
    /// timeline ignores.
    pub fn key_down(&mut self, code: &str) -> bool {
        let Some(key) = TimelineKey::from_code(code) else {
            trace!(code, "ignored key");
            return false;
        };
        self.handle_key(key);
        true
    }

    pub fn handle_key(&mut self, key: TimelineKey) {
        match KeyCommand::for_key(key, self.core.interaction.step_forward_ms) {
            KeyCommand::StepBy(delta_ms) => {
                let candidate = self.current_time().saturating_add(delta_ms);
                self.commit_time(candidate);
            }
            KeyCommand::TogglePlayback => {
                self.toggle_playback();
            }
        }
    }

    fn apply_drag_outcome(&mut self, outcome: DragOutcome) {
        match outcome {
            DragOutcome::None | DragOutcome::Settled => {}
            DragOutcome::Hover(indicator) => {
                self.core.interaction.hover = Some(indicator);
            }
            DragOutcome::ScrubBegan { time } => {
                self.emit_listener_event(TimelineEvent::ScrubBegan { time });
                self.emit_listener_event(TimelineEvent::ScrubMoved { time });
            }
            DragOutcome::ScrubMoved { time } => {
                self.emit_listener_event(TimelineEvent::ScrubMoved { time });
            }
            DragOutcome::Panned => {
                self.emit_visible_window_changed();
            }
            DragOutcome::Committed { time, scrub_ended } => {
                debug!(time, scrub_ended, "time committed");
                self.emit_listener_event(TimelineEvent::TimeCommitted { time });
                if scrub_ended {
                    self.emit_listener_event(TimelineEvent::ScrubEnded { time });
                }
            }
        }
    }
}
