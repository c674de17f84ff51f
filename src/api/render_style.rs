use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Colors and stroke settings for the timeline render plan.
///
/// Purely presentational: none of these values feed back into mapping,
/// snapping or gesture handling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineStyle {
    pub background_color: Color,
    pub border_color: Color,
    pub bottom_line_color: Color,
    /// Graduation tick color.
    pub vertical_bar_color: Color,
    pub label_color: Color,
    pub playhead_color: Color,
    /// Fill of the synthesized "not recorded" interval.
    pub gap_color: Color,
    pub hover_color: Color,
    pub tick_line_width: f64,
    pub playhead_line_width: f64,
    pub label_font_size_px: f64,
}

impl Default for TimelineStyle {
    fn default() -> Self {
        Self {
            background_color: Color::from_rgba8(0xf7, 0xf7, 0xf7, 0xff),
            border_color: Color::rgb(1.0, 1.0, 1.0),
            bottom_line_color: Color::TRANSPARENT,
            vertical_bar_color: Color::from_rgba8(0x33, 0x33, 0x33, 0xff),
            label_color: Color::from_rgba8(0x33, 0x33, 0x33, 0xff),
            playhead_color: Color::from_rgba8(0x3e, 0xbe, 0xff, 0xff),
            gap_color: Color::from_rgba8(0xd9, 0x10, 0x00, 0xff),
            hover_color: Color::from_rgba8(0x80, 0x80, 0x80, 0xff),
            tick_line_width: 1.0,
            playhead_line_width: 1.0,
            label_font_size_px: 10.0,
        }
    }
}

impl TimelineStyle {
    #[must_use]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    #[must_use]
    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    #[must_use]
    pub fn with_bottom_line_color(mut self, color: Color) -> Self {
        self.bottom_line_color = color;
        self
    }

    #[must_use]
    pub fn with_vertical_bar_color(mut self, color: Color) -> Self {
        self.vertical_bar_color = color;
        self
    }

    #[must_use]
    pub fn with_playhead_color(mut self, color: Color) -> Self {
        self.playhead_color = color;
        self
    }

    #[must_use]
    pub fn with_gap_color(mut self, color: Color) -> Self {
        self.gap_color = color;
        self
    }
}
