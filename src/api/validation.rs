use crate::error::{TimelineError, TimelineResult};

use super::{TimelineEngineConfig, TimelineStyle};

pub(super) fn validate_style(style: TimelineStyle) -> TimelineResult<()> {
    for color in [
        style.background_color,
        style.border_color,
        style.bottom_line_color,
        style.vertical_bar_color,
        style.label_color,
        style.playhead_color,
        style.gap_color,
        style.hover_color,
    ] {
        color.validate()?;
    }
    for (name, value) in [
        ("tick_line_width", style.tick_line_width),
        ("playhead_line_width", style.playhead_line_width),
        ("label_font_size_px", style.label_font_size_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(TimelineError::Config(format!(
                "style `{name}` must be finite and > 0"
            )));
        }
    }
    Ok(())
}

pub(super) fn validate_config(config: &TimelineEngineConfig) -> TimelineResult<()> {
    if !config.viewport.is_valid() {
        return Err(TimelineError::InvalidViewport {
            width: config.viewport.width,
            height: config.viewport.height,
        });
    }
    if !(-14 * 60..=14 * 60).contains(&config.label_utc_offset_minutes) {
        return Err(TimelineError::Config(
            "label UTC offset must be between -840 and 840 minutes".to_owned(),
        ));
    }
    validate_style(config.style)
}
