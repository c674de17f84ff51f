use serde::{Deserialize, Serialize};

use crate::core::{GraduationConfig, MidpointTieBreak, ThresholdInput, Viewport};

use super::TimelineStyle;

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can keep widget setup in JSON. Missing thresholds
/// default to twelve hours either side of the engine clock's "now".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEngineConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub start_threshold: Option<ThresholdInput>,
    #[serde(default)]
    pub end_threshold: Option<ThresholdInput>,
    /// Playhead time at start-up; the start threshold when absent.
    #[serde(default)]
    pub initial_time: Option<ThresholdInput>,
    #[serde(default = "default_speed_multiplier")]
    pub speed_multiplier: f64,
    /// Arrow-key step.
    #[serde(default = "default_step_forward_seconds")]
    pub step_forward_seconds: f64,
    #[serde(default = "default_playback_cadence_ms")]
    pub playback_cadence_ms: u64,
    #[serde(default)]
    pub graduation: GraduationConfig,
    #[serde(default)]
    pub midpoint_tie_break: MidpointTieBreak,
    /// Calendar for labels and day boundaries.
    #[serde(default)]
    pub label_utc_offset_minutes: i32,
    #[serde(default)]
    pub style: TimelineStyle,
}

impl TimelineEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            start_threshold: None,
            end_threshold: None,
            initial_time: None,
            speed_multiplier: default_speed_multiplier(),
            step_forward_seconds: default_step_forward_seconds(),
            playback_cadence_ms: default_playback_cadence_ms(),
            graduation: GraduationConfig::default(),
            midpoint_tie_break: MidpointTieBreak::default(),
            label_utc_offset_minutes: 0,
            style: TimelineStyle::default(),
        }
    }

    #[must_use]
    pub fn with_thresholds(
        mut self,
        start_threshold: impl Into<ThresholdInput>,
        end_threshold: impl Into<ThresholdInput>,
    ) -> Self {
        self.start_threshold = Some(start_threshold.into());
        self.end_threshold = Some(end_threshold.into());
        self
    }

    #[must_use]
    pub fn with_initial_time(mut self, time: impl Into<ThresholdInput>) -> Self {
        self.initial_time = Some(time.into());
        self
    }

    #[must_use]
    pub fn with_speed_multiplier(mut self, speed_multiplier: f64) -> Self {
        self.speed_multiplier = speed_multiplier;
        self
    }

    #[must_use]
    pub fn with_step_forward_seconds(mut self, seconds: f64) -> Self {
        self.step_forward_seconds = seconds;
        self
    }

    #[must_use]
    pub fn with_playback_cadence_ms(mut self, cadence_ms: u64) -> Self {
        self.playback_cadence_ms = cadence_ms;
        self
    }

    #[must_use]
    pub fn with_graduation(mut self, graduation: GraduationConfig) -> Self {
        self.graduation = graduation;
        self
    }

    #[must_use]
    pub fn with_midpoint_tie_break(mut self, tie_break: MidpointTieBreak) -> Self {
        self.midpoint_tie_break = tie_break;
        self
    }

    #[must_use]
    pub fn with_label_utc_offset_minutes(mut self, offset_minutes: i32) -> Self {
        self.label_utc_offset_minutes = offset_minutes;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: TimelineStyle) -> Self {
        self.style = style;
        self
    }
}

fn default_speed_multiplier() -> f64 {
    1.0
}

fn default_step_forward_seconds() -> f64 {
    5.0
}

fn default_playback_cadence_ms() -> u64 {
    1_000
}
