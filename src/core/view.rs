use crate::core::event::InputEvent;
use crate::ui::backend::Backend;
use crate::ui::core::geom::Rect;

/// A top-level surface that consumes input and paints itself into a backend.
pub trait View {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult;

    fn render(&mut self, backend: &mut dyn Backend, area: Rect);

    /// Whether the last input changed anything that needs repainting.
    fn needs_redraw(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
    Quit,
}

impl EventResult {
    pub fn is_consumed(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, EventResult::Quit)
    }
}
