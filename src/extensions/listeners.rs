use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::interaction::DragPhase;

/// Read-only state snapshot passed to listener hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ListenerContext {
    pub viewport: Viewport,
    pub left_time: i64,
    pub right_time: i64,
    pub hours_per_ruler: f64,
    pub current_time: i64,
    pub is_playing: bool,
    pub drag_phase: DragPhase,
}

/// Notifications raised after the state transition that causes them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimelineEvent {
    /// A snapped time became the playhead's committed time.
    TimeCommitted { time: i64 },
    ScrubBegan { time: i64 },
    /// Unsnapped pointer time while the playhead is being dragged.
    ScrubMoved { time: i64 },
    ScrubEnded { time: i64 },
    PlaybackToggled { playing: bool },
    VisibleWindowChanged {
        left_time: i64,
        right_time: i64,
        hours_per_ruler: f64,
    },
}

/// Observer interface for timeline notifications.
///
/// Listeners can read engine context but never mutate engine state; calls are
/// synchronous and must not re-enter the engine.
pub trait TimelineListener {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: TimelineEvent, context: ListenerContext);
}
