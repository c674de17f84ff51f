use tracing::trace;

use crate::core::TimeSnapper;
use crate::extensions::TimelineEvent;
use crate::interaction::{DragPhase, PlaybackFire, PlaybackHandle};
use crate::render::Renderer;

use super::TimelineEngine;

impl<R: Renderer> TimelineEngine<R> {
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.core.interaction.playback.is_playing()
    }

    #[must_use]
    pub fn playback_handle(&self) -> Option<PlaybackHandle> {
        self.core.interaction.playback.handle()
    }

    /// Milliseconds between fires the host timer should use.
    #[must_use]
    pub fn playback_cadence_ms(&self) -> u64 {
        self.core.interaction.playback.cadence_ms()
    }

    #[must_use]
    pub fn playback_advance_ms(&self) -> i64 {
        self.core.interaction.playback.advance_ms()
    }

    /// Starts playback, or returns the running session's handle.
    pub fn start_playback(&mut self) -> PlaybackHandle {
        let (handle, created) = self.core.interaction.playback.start();
        if created {
            self.emit_listener_event(TimelineEvent::PlaybackToggled { playing: true });
        }
        handle
    }

    /// Stops playback; outstanding handles go stale. Returns `false` when
    /// nothing was playing.
    pub fn stop_playback(&mut self) -> bool {
        let stopped = self.core.interaction.playback.stop();
        if stopped {
            self.emit_listener_event(TimelineEvent::PlaybackToggled { playing: false });
        }
        stopped
    }

    /// Returns the new session's handle when playback was started.
    pub fn toggle_playback(&mut self) -> Option<PlaybackHandle> {
        if self.is_playing() {
            self.stop_playback();
            None
        } else {
            Some(self.start_playback())
        }
    }

    /// One host timer tick for `handle`.
    ///
    /// While the playhead is being dragged the tick is absorbed and reported
    /// as stalled at the committed time.
    pub fn playback_fire(&mut self, handle: PlaybackHandle) -> PlaybackFire {
        let current_time = self.current_time();
        if self.core.interaction.playback.handle() == Some(handle)
            && self.core.interaction.drag.phase() == DragPhase::DraggingPlayhead
        {
            trace!(current_time, "playback tick absorbed by scrub");
            return PlaybackFire::Stalled { time: current_time };
        }

        let bounds = self.snap_bounds();
        let snapper = TimeSnapper::new(
            &self.core.model.intervals,
            bounds,
            self.core.model.tie_break,
        );
        let fire = self
            .core
            .interaction
            .playback
            .fire(handle, current_time, &snapper);
        if let PlaybackFire::Advanced { time } = fire {
            self.set_committed_time(time);
        }
        fire
    }
}
