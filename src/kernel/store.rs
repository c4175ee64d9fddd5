use super::{Action, TodoState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    pub state_changed: bool,
}

impl DispatchResult {
    const fn changed(state_changed: bool) -> Self {
        Self { state_changed }
    }
}

/// Single owner of `TodoState`. All writes go through `dispatch`, which
/// reports whether the renderer has to repaint.
pub struct Store {
    state: TodoState,
}

impl Store {
    pub fn new(state: TodoState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &TodoState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        tracing::trace!(?action, "dispatch");
        match action {
            Action::AddTask => match self.state.submit_pending() {
                Some(id) => {
                    tracing::debug!(%id, total = self.state.tasks().len(), "task added");
                    DispatchResult::changed(true)
                }
                None => DispatchResult::changed(false),
            },
            Action::ToggleTask { id } => {
                let changed = self.state.toggle_task(id);
                if changed {
                    let completed = self.state.task(id).is_some_and(|t| t.completed);
                    tracing::debug!(%id, completed, "task toggled");
                } else {
                    tracing::debug!(%id, "toggle ignored: unknown task");
                }
                DispatchResult::changed(changed)
            }
            Action::DeleteTask { id } => {
                let changed = self.state.delete_task(id);
                if changed {
                    tracing::debug!(%id, total = self.state.tasks().len(), "task deleted");
                } else {
                    tracing::debug!(%id, "delete ignored: unknown task");
                }
                DispatchResult::changed(changed)
            }
            Action::SetPendingInput(text) => {
                DispatchResult::changed(self.state.set_pending_input(&text))
            }
            Action::InputInsert(ch) => DispatchResult::changed(self.state.insert_char(ch)),
            Action::InputInsertStr(text) => DispatchResult::changed(self.state.insert_str(&text)),
            Action::InputBackspace => DispatchResult::changed(self.state.backspace()),
            Action::InputDelete => DispatchResult::changed(self.state.delete_forward()),
            Action::InputCursorLeft => DispatchResult::changed(self.state.cursor_left()),
            Action::InputCursorRight => DispatchResult::changed(self.state.cursor_right()),
            Action::InputCursorHome => DispatchResult::changed(self.state.cursor_home()),
            Action::InputCursorEnd => DispatchResult::changed(self.state.cursor_end()),
            Action::InputClear => DispatchResult::changed(self.state.clear_input()),
            Action::SetFocus(focus) => DispatchResult::changed(self.state.set_focus(focus)),
            Action::ToggleFocus => DispatchResult::changed(self.state.toggle_focus()),
            Action::MoveSelection { delta } => {
                DispatchResult::changed(self.state.move_selection(delta))
            }
            Action::SelectRow { index } => DispatchResult::changed(self.state.select_row(index)),
            Action::ToggleSelected => {
                let id = self.state.selected_task().map(|t| t.id);
                match id {
                    Some(id) => self.dispatch(Action::ToggleTask { id }),
                    None => DispatchResult::changed(false),
                }
            }
            Action::DeleteSelected => {
                let id = self.state.selected_task().map(|t| t.id);
                match id {
                    Some(id) => self.dispatch(Action::DeleteTask { id }),
                    None => DispatchResult::changed(false),
                }
            }
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(TodoState::new())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
