mod drag;
mod keyboard;
mod playback;

pub use drag::{
    DragOutcome, DragPhase, DragStateMachine, HoverIndicator, PlayheadGlyph, PlayheadState,
};
pub use keyboard::{KeyCommand, TimelineKey};
pub use playback::{PlaybackClock, PlaybackFire, PlaybackHandle};
