use crate::core::{
    GraduationGenerator, IntervalIndex, LabelCalendar, MidpointTieBreak, Viewport, WallClock,
    ZoomPanController,
};
use crate::extensions::TimelineListener;
use crate::interaction::{DragStateMachine, HoverIndicator, PlaybackClock, PlayheadState};

use super::TimelineStyle;

/// Internal engine state used by the public facade (`TimelineEngine`).
pub(super) struct EngineCore {
    pub(super) model: TimelineModel,
    pub(super) interaction: TimelineInteractionState,
    pub(super) presentation: TimelinePresentationState,
    pub(super) runtime: TimelineRuntimeState,
}

/// Axis geometry and the data the playhead is constrained by.
pub(super) struct TimelineModel {
    pub(super) viewport: Viewport,
    pub(super) zoom_pan: ZoomPanController,
    pub(super) intervals: IntervalIndex,
    pub(super) start_threshold: i64,
    pub(super) end_threshold: i64,
    pub(super) tie_break: MidpointTieBreak,
}

pub(super) struct TimelineInteractionState {
    pub(super) playhead: PlayheadState,
    pub(super) drag: DragStateMachine,
    pub(super) hover: Option<HoverIndicator>,
    pub(super) playback: PlaybackClock,
    pub(super) step_forward_ms: i64,
}

pub(super) struct TimelinePresentationState {
    pub(super) style: TimelineStyle,
    pub(super) graduations: GraduationGenerator,
    pub(super) calendar: LabelCalendar,
}

pub(super) struct TimelineRuntimeState {
    pub(super) clock: Box<dyn WallClock>,
    pub(super) listeners: Vec<Box<dyn TimelineListener>>,
}
