use crate::extensions::{ListenerContext, TimelineEvent};
use crate::render::Renderer;

use super::TimelineEngine;

impl<R: Renderer> TimelineEngine<R> {
    pub(super) fn listener_context(&self) -> ListenerContext {
        let window = self.view_window();
        ListenerContext {
            viewport: self.core.model.viewport,
            left_time: window.left_time(),
            right_time: window.right_time(),
            hours_per_ruler: window.hours_per_ruler(),
            current_time: self.core.interaction.playhead.current_time,
            is_playing: self.core.interaction.playback.is_playing(),
            drag_phase: self.core.interaction.drag.phase(),
        }
    }

    pub(super) fn emit_listener_event(&mut self, event: TimelineEvent) {
        if self.core.runtime.listeners.is_empty() {
            return;
        }
        let context = self.listener_context();
        for listener in &mut self.core.runtime.listeners {
            listener.on_event(event, context);
        }
    }

    pub(super) fn emit_visible_window_changed(&mut self) {
        let window = self.view_window();
        self.emit_listener_event(TimelineEvent::VisibleWindowChanged {
            left_time: window.left_time(),
            right_time: window.right_time(),
            hours_per_ruler: window.hours_per_ruler(),
        });
    }
}
