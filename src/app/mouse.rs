use super::TodoApp;
use crate::core::event::{MouseButton, MouseEvent, MouseEventKind};
use crate::core::view::EventResult;
use crate::kernel::{Action, FocusTarget, TaskId};
use crate::ui::core::geom::Pos;
use crate::ui::core::tree::{NodeKind, Sense};

impl TodoApp {
    pub(super) fn handle_mouse(&mut self, event: &MouseEvent) -> EventResult {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(event),
            MouseEventKind::ScrollUp => self.scroll_list(event, -1),
            MouseEventKind::ScrollDown => self.scroll_list(event, 1),
            _ => EventResult::Ignored,
        }
    }

    fn handle_click(&mut self, event: &MouseEvent) -> EventResult {
        let pos = Pos::new(event.column, event.row);
        let Some(kind) = self.ui_tree.hit_test(pos, Sense::CLICK).map(|n| n.kind) else {
            return EventResult::Ignored;
        };
        tracing::debug!(?kind, x = pos.x, y = pos.y, "click");

        match kind {
            NodeKind::InputField => {
                self.dispatch(Action::SetFocus(FocusTarget::Input));
            }
            NodeKind::AddButton => {
                self.dispatch(Action::AddTask);
                self.dispatch(Action::SetFocus(FocusTarget::Input));
            }
            NodeKind::TaskToggle { task_id } => {
                self.dispatch(Action::ToggleTask {
                    id: TaskId::raw(task_id),
                });
            }
            NodeKind::TaskDelete { task_id } => {
                self.dispatch(Action::DeleteTask {
                    id: TaskId::raw(task_id),
                });
            }
            NodeKind::TaskRow { index, .. } => {
                self.dispatch(Action::SelectRow { index });
            }
        }
        EventResult::Consumed
    }

    /// Wheel over a task row moves the selection.
    fn scroll_list(&mut self, event: &MouseEvent, delta: isize) -> EventResult {
        let pos = Pos::new(event.column, event.row);
        let over_row = self
            .ui_tree
            .nodes()
            .iter()
            .any(|n| matches!(n.kind, NodeKind::TaskRow { .. }) && n.contains(pos));
        if !over_row {
            return EventResult::Ignored;
        }
        self.dispatch(Action::SetFocus(FocusTarget::List));
        self.dispatch(Action::MoveSelection { delta });
        EventResult::Consumed
    }
}
