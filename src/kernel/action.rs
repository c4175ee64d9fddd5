use super::id::TaskId;
use super::state::FocusTarget;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Submit the pending input as a new task.
    AddTask,
    ToggleTask {
        id: TaskId,
    },
    DeleteTask {
        id: TaskId,
    },
    SetPendingInput(String),
    InputInsert(char),
    InputInsertStr(String),
    InputBackspace,
    InputDelete,
    InputCursorLeft,
    InputCursorRight,
    InputCursorHome,
    InputCursorEnd,
    InputClear,
    SetFocus(FocusTarget),
    ToggleFocus,
    MoveSelection {
        delta: isize,
    },
    SelectRow {
        index: usize,
    },
    ToggleSelected,
    DeleteSelected,
}
