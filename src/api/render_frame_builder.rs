use crate::core::{GapContext, GraduationTier};
use crate::render::{
    LinePrimitive, PolygonPrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

use super::TimelineEngine;

/// Tick heights in scale units, by tier.
const MAJOR_TICK_UNITS: f64 = 1.75;
const MEDIUM_TICK_UNITS: f64 = 1.25;
const MINOR_TICK_UNITS: f64 = 0.75;

const TICK_LABEL_Y_UNITS: f64 = 2.0;
const HOVER_LINE_UNITS: f64 = 3.0;
const HOVER_LABEL_Y_UNITS: f64 = 3.75;

impl<R: Renderer> TimelineEngine<R> {
    /// Materializes backend-agnostic primitives for one draw pass.
    ///
    /// The plan is rebuilt from scratch on every call; nothing is diffed.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        let viewport = self.core.model.viewport;
        let window = self.view_window();
        let style = self.core.presentation.style;
        let calendar = self.core.presentation.calendar;
        let glyph = self.playhead_glyph();
        let unit = glyph.scale_unit();
        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);

        let mut frame = RenderFrame::new(viewport)
            .with_rect(RectPrimitive::new(0.0, 0.0, width, height, style.background_color));

        let gap_context = GapContext {
            now_ms: self.core.runtime.clock.now_ms(),
            end_threshold: self.core.model.end_threshold,
            color: style.gap_color,
        };
        for interval in self
            .core
            .model
            .intervals
            .visible_intervals(window, gap_context)
        {
            let x = window.time_to_pixel(interval.start_time);
            let band_width = interval.duration_ms() as f64 * window.pixels_per_ms();
            frame = frame.with_rect(RectPrimitive::new(x, 0.0, band_width, unit, interval.color));
        }

        for (x1, y1, x2, y2) in [
            (0.0, 0.0, width, 0.0),
            (0.0, 0.0, 0.0, height),
            (width, 0.0, width, height),
        ] {
            frame = frame.with_line(LinePrimitive::new(
                x1,
                y1,
                x2,
                y2,
                1.0,
                style.border_color,
            ));
        }

        for graduation in self.core.presentation.graduations.generate(window) {
            let tick_units = match graduation.tier {
                GraduationTier::Major => MAJOR_TICK_UNITS,
                GraduationTier::Medium => MEDIUM_TICK_UNITS,
                GraduationTier::Minor => MINOR_TICK_UNITS,
            };
            frame = frame.with_line(LinePrimitive::vertical(
                graduation.pixel_x,
                0.0,
                unit * tick_units,
                style.tick_line_width,
                style.vertical_bar_color,
            ));
            if let Some(label) = graduation.label {
                frame = frame.with_text(TextPrimitive::new(
                    label,
                    graduation.pixel_x,
                    unit * TICK_LABEL_Y_UNITS,
                    style.label_font_size_px,
                    style.label_color,
                    TextHAlign::Center,
                ));
            }
        }

        frame = frame.with_line(LinePrimitive::new(
            0.0,
            height,
            width,
            height,
            1.0,
            style.bottom_line_color,
        ));

        if let Some(hover) = self.core.interaction.hover {
            frame = frame
                .with_line(LinePrimitive::vertical(
                    hover.pixel_x,
                    0.0,
                    unit * HOVER_LINE_UNITS,
                    1.0,
                    style.hover_color,
                ))
                .with_text(TextPrimitive::new(
                    calendar.format_clock(hover.time),
                    hover.pixel_x,
                    unit * HOVER_LABEL_Y_UNITS,
                    style.label_font_size_px,
                    style.hover_color,
                    TextHAlign::Center,
                ));
        }

        let playhead = self.core.interaction.playhead;
        frame
            .with_line(LinePrimitive::vertical(
                playhead.pixel_x,
                0.0,
                glyph.stem_bottom_y(),
                style.playhead_line_width,
                style.playhead_color,
            ))
            .with_polygon(PolygonPrimitive::new(
                glyph.vertices(playhead.pixel_x),
                style.playhead_color,
            ))
            .with_text(TextPrimitive::new(
                calendar.format_clock(playhead.display_time(window)),
                playhead.pixel_x,
                glyph.label_y(),
                style.label_font_size_px,
                style.playhead_color,
                TextHAlign::Center,
            ))
    }
}
