use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{TimeSnapper, round_millis};

/// Token for one play session.
///
/// The host's periodic timer carries it into every fire; once playback stops
/// (or restarts) the old token no longer matches and its fires are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaybackHandle {
    generation: u64,
}

impl PlaybackHandle {
    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackFire {
    /// Fire from a cancelled session; nothing happened.
    Stale,
    Advanced { time: i64 },
    /// Snap kept the time where it was (upper bound or hole edge). Playback
    /// keeps running until explicitly stopped.
    Stalled { time: i64 },
}

/// Cadence and step of the playback timer plus the active session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackClock {
    cadence_ms: u64,
    advance_ms: i64,
    active: Option<PlaybackHandle>,
    next_generation: u64,
}

impl PlaybackClock {
    #[must_use]
    pub fn new(cadence_ms: u64, advance_ms: i64) -> Self {
        Self {
            cadence_ms: cadence_ms.max(1),
            advance_ms: advance_ms.max(1),
            active: None,
            next_generation: 1,
        }
    }

    /// Advance per fire is `speed_multiplier * cadence_ms`, at least 1 ms.
    #[must_use]
    pub fn with_speed(cadence_ms: u64, speed_multiplier: f64) -> Self {
        let mut clock = Self::new(cadence_ms, 1);
        clock.set_speed_multiplier(speed_multiplier);
        clock
    }

    /// Rescales the advance; a running session keeps its handle.
    pub fn set_speed_multiplier(&mut self, speed_multiplier: f64) {
        let speed = if speed_multiplier.is_finite() && speed_multiplier > 0.0 {
            speed_multiplier
        } else {
            warn!(speed_multiplier, "invalid playback speed; using 1x");
            1.0
        };
        self.advance_ms = round_millis(speed * self.cadence_ms as f64).max(1);
    }

    #[must_use]
    pub fn cadence_ms(&self) -> u64 {
        self.cadence_ms
    }

    #[must_use]
    pub fn advance_ms(&self) -> i64 {
        self.advance_ms
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub fn handle(&self) -> Option<PlaybackHandle> {
        self.active
    }

    /// Starts a session, or returns the running one. The flag is `true` only
    /// when a new session was created.
    pub fn start(&mut self) -> (PlaybackHandle, bool) {
        if let Some(handle) = self.active {
            return (handle, false);
        }
        let handle = PlaybackHandle {
            generation: self.next_generation,
        };
        self.next_generation += 1;
        self.active = Some(handle);
        debug!(generation = handle.generation, "playback started");
        (handle, true)
    }

    /// Cancels the session. Returns `false` when already stopped.
    pub fn stop(&mut self) -> bool {
        match self.active.take() {
            Some(handle) => {
                debug!(generation = handle.generation, "playback stopped");
                true
            }
            None => false,
        }
    }

    /// One timer fire: proposes `current_time + advance` and snaps it.
    #[must_use]
    pub fn fire(
        &self,
        handle: PlaybackHandle,
        current_time: i64,
        snapper: &TimeSnapper<'_>,
    ) -> PlaybackFire {
        if self.active != Some(handle) {
            return PlaybackFire::Stale;
        }
        let candidate = current_time.saturating_add(self.advance_ms);
        let time = snapper.snap(candidate);
        trace!(candidate, time, "playback tick");
        if time == current_time {
            PlaybackFire::Stalled { time }
        } else {
            PlaybackFire::Advanced { time }
        }
    }
}
