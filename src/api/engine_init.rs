use tracing::{debug, warn};

use crate::core::{
    GraduationGenerator, IntervalIndex, LabelCalendar, MILLIS_PER_HOUR, MILLIS_PER_SECOND,
    SnapBounds, SystemClock, TimeSnapper, ViewWindow, WallClock, ZoomPanController,
    hours_for_threshold_span, normalize_threshold_or, round_millis,
};
use crate::error::TimelineResult;
use crate::interaction::{DragStateMachine, PlaybackClock, PlayheadState};
use crate::render::Renderer;

use super::engine_core::{
    EngineCore, TimelineInteractionState, TimelineModel, TimelinePresentationState,
    TimelineRuntimeState,
};
use super::validation::validate_config;
use super::{TimelineEngine, TimelineEngineConfig};

/// Distance of the default thresholds from "now".
const DEFAULT_THRESHOLD_REACH_MS: i64 = 12 * MILLIS_PER_HOUR;

impl<R: Renderer> TimelineEngine<R> {
    /// Creates an engine driven by the system wall clock.
    pub fn new(renderer: R, config: TimelineEngineConfig) -> TimelineResult<Self> {
        Self::with_clock(renderer, config, Box::new(SystemClock))
    }

    /// Creates an engine with an explicit source of "now".
    pub fn with_clock(
        renderer: R,
        config: TimelineEngineConfig,
        clock: Box<dyn WallClock>,
    ) -> TimelineResult<Self> {
        validate_config(&config)?;

        let now_ms = clock.now_ms();
        let start_threshold = config.start_threshold.as_ref().map_or(
            now_ms.saturating_sub(DEFAULT_THRESHOLD_REACH_MS),
            |input| normalize_threshold_or(input, now_ms.saturating_sub(DEFAULT_THRESHOLD_REACH_MS)),
        );
        let end_threshold = config.end_threshold.as_ref().map_or(
            now_ms.saturating_add(DEFAULT_THRESHOLD_REACH_MS),
            |input| normalize_threshold_or(input, now_ms.saturating_add(DEFAULT_THRESHOLD_REACH_MS)),
        );

        let hours_per_ruler = hours_for_threshold_span(start_threshold, end_threshold);
        let window = ViewWindow::new(
            start_threshold,
            hours_per_ruler,
            f64::from(config.viewport.width),
        );

        let intervals = IntervalIndex::default();
        let requested_time = config
            .initial_time
            .as_ref()
            .map_or(start_threshold, |input| {
                normalize_threshold_or(input, start_threshold)
            });
        let bounds = SnapBounds::new(start_threshold, end_threshold, now_ms);
        let initial_time =
            TimeSnapper::new(&intervals, bounds, config.midpoint_tie_break).snap(requested_time);

        let calendar = LabelCalendar::new(config.label_utc_offset_minutes);
        debug!(
            start_threshold,
            end_threshold, hours_per_ruler, initial_time, "timeline engine initialized"
        );

        Ok(Self {
            renderer,
            core: EngineCore {
                model: TimelineModel {
                    viewport: config.viewport,
                    zoom_pan: ZoomPanController::new(window),
                    intervals,
                    start_threshold,
                    end_threshold,
                    tie_break: config.midpoint_tie_break,
                },
                interaction: TimelineInteractionState {
                    playhead: PlayheadState::at(initial_time, window),
                    drag: DragStateMachine::default(),
                    hover: None,
                    playback: PlaybackClock::with_speed(
                        config.playback_cadence_ms,
                        config.speed_multiplier,
                    ),
                    step_forward_ms: step_forward_ms(config.step_forward_seconds),
                },
                presentation: TimelinePresentationState {
                    style: config.style,
                    graduations: GraduationGenerator::new(config.graduation, calendar),
                    calendar,
                },
                runtime: TimelineRuntimeState {
                    clock,
                    listeners: Vec::new(),
                },
            },
        })
    }
}

/// Arrow-key step in ms; invalid or sub-millisecond input falls back to 5 s.
pub(super) fn step_forward_ms(seconds: f64) -> i64 {
    let step = round_millis(seconds * MILLIS_PER_SECOND as f64);
    if seconds.is_finite() && step > 0 {
        step
    } else {
        warn!(seconds, "invalid step-forward value; using 5 s");
        5 * MILLIS_PER_SECOND
    }
}
