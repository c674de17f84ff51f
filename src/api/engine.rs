use tracing::trace;

use crate::error::TimelineResult;
use crate::render::Renderer;

use super::validation::validate_style;
use super::{TimelineStyle, engine_core::EngineCore};

/// Main orchestration facade consumed by host applications.
///
/// `TimelineEngine` owns the view window, interval snapshot, playhead and
/// gesture state. Host callbacks go in through the `&mut self` methods, one at
/// a time; the renderer only ever sees finished `RenderFrame`s.
pub struct TimelineEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) core: EngineCore,
}

impl<R: Renderer> TimelineEngine<R> {
    #[must_use]
    pub fn style(&self) -> TimelineStyle {
        self.core.presentation.style
    }

    pub fn set_style(&mut self, style: TimelineStyle) -> TimelineResult<()> {
        validate_style(style)?;
        self.core.presentation.style = style;
        Ok(())
    }

    /// Builds the current render plan and hands it to the renderer.
    pub fn render(&mut self) -> TimelineResult<()> {
        let frame = self.build_render_frame();
        trace!(
            rects = frame.rects.len(),
            lines = frame.lines.len(),
            texts = frame.texts.len(),
            "render timeline frame"
        );
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
