pub mod clock;
pub mod graduation;
pub mod interval;
pub mod snapper;
pub mod threshold;
pub mod time_format;
pub mod types;
pub mod view_window;
pub mod zoom_pan;

pub use clock::{FixedClock, SystemClock, WallClock};
pub use graduation::{
    Graduation, GraduationConfig, GraduationGenerator, GraduationLayout, GraduationTier,
    Graduations, MINUTES_PER_STEP,
};
pub use interval::{GapContext, Interval, IntervalIndex, IntervalTag};
pub use snapper::{MidpointTieBreak, SnapBounds, TimeSnapper};
pub use threshold::{ThresholdInput, normalize_threshold, normalize_threshold_or};
pub use time_format::LabelCalendar;
pub use types::{
    MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND, Viewport, round_millis,
};
pub use view_window::{
    MAX_HOURS_PER_RULER, MIN_HOURS_PER_RULER, ViewWindow, hours_for_threshold_span,
};
pub use zoom_pan::ZoomPanController;
