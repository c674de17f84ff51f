use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{TimeSnapper, ViewWindow, Viewport, ZoomPanController};

/// Pointer gesture phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragPhase {
    Idle,
    /// Pointer is down but has not moved yet; pan vs. scrub is undecided.
    Pressed,
    PanningTimeline,
    DraggingPlayhead,
}

/// Committed playhead time plus its on-screen position.
///
/// While `dragging`, `pixel_x` follows the pointer and is not yet reflected
/// in `current_time`; the commit happens on release.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayheadState {
    pub current_time: i64,
    pub pixel_x: f64,
    pub dragging: bool,
    pub is_panning: bool,
}

impl PlayheadState {
    #[must_use]
    pub fn at(current_time: i64, window: ViewWindow) -> Self {
        Self {
            current_time,
            pixel_x: window.time_to_pixel(current_time),
            dragging: false,
            is_panning: false,
        }
    }

    /// Time under the marker: the unsnapped pointer time mid-drag, the
    /// committed time otherwise.
    #[must_use]
    pub fn display_time(self, window: ViewWindow) -> i64 {
        if self.dragging {
            window.pixel_to_time_ms(self.pixel_x)
        } else {
            self.current_time
        }
    }

    pub(crate) fn reproject(&mut self, window: ViewWindow) {
        if !self.dragging {
            self.pixel_x = window.time_to_pixel(self.current_time);
        }
    }
}

/// Geometry of the playhead marker, proportioned to the canvas height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayheadGlyph {
    scale_unit: f64,
}

impl PlayheadGlyph {
    pub const HALF_WIDTH_UNITS: f64 = 0.6;

    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            scale_unit: viewport.scale_unit(),
        }
    }

    #[must_use]
    pub fn scale_unit(self) -> f64 {
        self.scale_unit
    }

    #[must_use]
    pub fn stem_bottom_y(self) -> f64 {
        self.scale_unit * 2.0
    }

    #[must_use]
    pub fn label_y(self) -> f64 {
        self.scale_unit * 4.55
    }

    /// Vertical band `[top, bottom]` of the grab handle.
    #[must_use]
    pub fn handle_band(self) -> (f64, f64) {
        (self.scale_unit * 2.75, self.scale_unit * 3.75)
    }

    #[must_use]
    pub fn contains(self, playhead_x: f64, x: f64, y: f64) -> bool {
        let half_width = self.scale_unit * Self::HALF_WIDTH_UNITS;
        let (top, bottom) = self.handle_band();
        x >= playhead_x - half_width && x <= playhead_x + half_width && y >= top && y <= bottom
    }

    /// Pentagon hanging below the stem, tip first.
    #[must_use]
    pub fn vertices(self, playhead_x: f64) -> Vec<(f64, f64)> {
        let half_width = self.scale_unit * Self::HALF_WIDTH_UNITS;
        let (top, bottom) = self.handle_band();
        vec![
            (playhead_x, self.stem_bottom_y()),
            (playhead_x - half_width, top),
            (playhead_x - half_width, bottom),
            (playhead_x + half_width, bottom),
            (playhead_x + half_width, top),
        ]
    }
}

/// Advisory time readout under an idle pointer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverIndicator {
    pub pixel_x: f64,
    pub time: i64,
}

/// What a pointer callback did, for the caller to turn into notifications.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    None,
    Hover(HoverIndicator),
    ScrubBegan { time: i64 },
    ScrubMoved { time: i64 },
    Panned,
    /// A snapped time was committed; `scrub_ended` when it closed a playhead drag.
    Committed { time: i64, scrub_ended: bool },
    /// Gesture finished without moving the committed time.
    Settled,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragStateMachine {
    phase: DragPhase,
    press_x: f64,
    press_y: f64,
    last_x: f64,
}

impl Default for DragStateMachine {
    fn default() -> Self {
        Self {
            phase: DragPhase::Idle,
            press_x: 0.0,
            press_y: 0.0,
            last_x: 0.0,
        }
    }
}

impl DragStateMachine {
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    #[must_use]
    pub fn press_position(&self) -> Option<(f64, f64)> {
        (self.phase != DragPhase::Idle).then_some((self.press_x, self.press_y))
    }

    /// Records the press; pan vs. scrub is decided on the first move.
    ///
    /// A press that arrives before the previous gesture was released settles
    /// that gesture first, as if it had been released where it last was.
    pub fn pointer_down(
        &mut self,
        x: f64,
        y: f64,
        window: ViewWindow,
        playhead: &mut PlayheadState,
        snapper: &TimeSnapper<'_>,
    ) -> DragOutcome {
        let settled = match self.phase {
            DragPhase::Idle => DragOutcome::None,
            DragPhase::DraggingPlayhead => {
                debug!("press while scrubbing; dropping the playhead first");
                self.finish_scrub(window, playhead, snapper)
            }
            DragPhase::Pressed | DragPhase::PanningTimeline => {
                playhead.is_panning = false;
                DragOutcome::Settled
            }
        };
        self.phase = DragPhase::Pressed;
        self.press_x = x;
        self.press_y = y;
        self.last_x = x;
        trace!(x, y, "pointer pressed");
        settled
    }

    pub fn pointer_move(
        &mut self,
        x: f64,
        zoom_pan: &mut ZoomPanController,
        playhead: &mut PlayheadState,
        glyph: PlayheadGlyph,
    ) -> DragOutcome {
        match self.phase {
            DragPhase::Idle => {
                let window = zoom_pan.window();
                DragOutcome::Hover(HoverIndicator {
                    pixel_x: x,
                    time: window.pixel_to_time_ms(x),
                })
            }
            DragPhase::Pressed => {
                // Hit-test where the press happened, not where the pointer is now.
                if glyph.contains(playhead.pixel_x, self.press_x, self.press_y) {
                    self.phase = DragPhase::DraggingPlayhead;
                    playhead.dragging = true;
                    playhead.pixel_x = x;
                    let time = zoom_pan.window().pixel_to_time_ms(x);
                    debug!(time, "playhead scrub began");
                    DragOutcome::ScrubBegan { time }
                } else {
                    self.phase = DragPhase::PanningTimeline;
                    playhead.is_panning = true;
                    debug!("timeline pan began");
                    self.pan_to(x, zoom_pan, playhead)
                }
            }
            DragPhase::DraggingPlayhead => {
                playhead.pixel_x = x;
                DragOutcome::ScrubMoved {
                    time: zoom_pan.window().pixel_to_time_ms(x),
                }
            }
            DragPhase::PanningTimeline => self.pan_to(x, zoom_pan, playhead),
        }
    }

    fn pan_to(
        &mut self,
        x: f64,
        zoom_pan: &mut ZoomPanController,
        playhead: &mut PlayheadState,
    ) -> DragOutcome {
        let delta_x = x - self.last_x;
        self.last_x = x;
        if !zoom_pan.apply_pan(delta_x) {
            return DragOutcome::None;
        }
        // Keep the marker pinned to its time while the ruler slides.
        playhead.reproject(zoom_pan.window());
        DragOutcome::Panned
    }

    /// Ends the gesture at `x`. A bare click seeks, a playhead drag commits
    /// where it was dropped, and a pan just settles.
    pub fn pointer_up(
        &mut self,
        x: f64,
        window: ViewWindow,
        playhead: &mut PlayheadState,
        snapper: &TimeSnapper<'_>,
    ) -> DragOutcome {
        match self.phase {
            DragPhase::Idle => DragOutcome::None,
            DragPhase::Pressed => {
                self.phase = DragPhase::Idle;
                let time = commit(playhead, window.pixel_to_time_ms(x), window, snapper);
                DragOutcome::Committed {
                    time,
                    scrub_ended: false,
                }
            }
            DragPhase::DraggingPlayhead => {
                playhead.pixel_x = x;
                self.finish_scrub(window, playhead, snapper)
            }
            DragPhase::PanningTimeline => {
                self.phase = DragPhase::Idle;
                playhead.is_panning = false;
                DragOutcome::Settled
            }
        }
    }

    /// Pointer left the canvas: same as a release without moving, except a
    /// pending click does not seek.
    pub fn pointer_leave(
        &mut self,
        window: ViewWindow,
        playhead: &mut PlayheadState,
        snapper: &TimeSnapper<'_>,
    ) -> DragOutcome {
        match self.phase {
            DragPhase::Idle => DragOutcome::None,
            DragPhase::DraggingPlayhead => self.finish_scrub(window, playhead, snapper),
            DragPhase::Pressed | DragPhase::PanningTimeline => {
                self.phase = DragPhase::Idle;
                playhead.is_panning = false;
                DragOutcome::Settled
            }
        }
    }

    fn finish_scrub(
        &mut self,
        window: ViewWindow,
        playhead: &mut PlayheadState,
        snapper: &TimeSnapper<'_>,
    ) -> DragOutcome {
        self.phase = DragPhase::Idle;
        let dropped_at = window.pixel_to_time_ms(playhead.pixel_x);
        let time = commit(playhead, dropped_at, window, snapper);
        debug!(dropped_at, time, "playhead scrub ended");
        DragOutcome::Committed {
            time,
            scrub_ended: true,
        }
    }
}

/// Snaps `candidate` and replaces the playhead with the committed state.
fn commit(
    playhead: &mut PlayheadState,
    candidate: i64,
    window: ViewWindow,
    snapper: &TimeSnapper<'_>,
) -> i64 {
    let time = snapper.snap(candidate);
    *playhead = PlayheadState::at(time, window);
    time
}
