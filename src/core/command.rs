//! Semantic commands that key chords resolve to.
//!
//! Commands are frontend concepts (focus, caret movement, "act on the selected
//! row"); the app turns them into kernel actions.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Quit,
    ToggleFocus,
    FocusInput,
    FocusList,

    // Input row
    Submit,
    ClearInput,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    DeleteBackward,
    DeleteForward,

    // Task list
    SelectPrev,
    SelectNext,
    SelectFirst,
    SelectLast,
    ToggleSelected,
    DeleteSelected,
}

impl Command {
    pub const ALL: [Command; 18] = [
        Command::Quit,
        Command::ToggleFocus,
        Command::FocusInput,
        Command::FocusList,
        Command::Submit,
        Command::ClearInput,
        Command::CursorLeft,
        Command::CursorRight,
        Command::CursorHome,
        Command::CursorEnd,
        Command::DeleteBackward,
        Command::DeleteForward,
        Command::SelectPrev,
        Command::SelectNext,
        Command::SelectFirst,
        Command::SelectLast,
        Command::ToggleSelected,
        Command::DeleteSelected,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Command::Quit => "quit",
            Command::ToggleFocus => "toggle_focus",
            Command::FocusInput => "focus_input",
            Command::FocusList => "focus_list",
            Command::Submit => "submit",
            Command::ClearInput => "clear_input",
            Command::CursorLeft => "cursor_left",
            Command::CursorRight => "cursor_right",
            Command::CursorHome => "cursor_home",
            Command::CursorEnd => "cursor_end",
            Command::DeleteBackward => "delete_backward",
            Command::DeleteForward => "delete_forward",
            Command::SelectPrev => "select_prev",
            Command::SelectNext => "select_next",
            Command::SelectFirst => "select_first",
            Command::SelectLast => "select_last",
            Command::ToggleSelected => "toggle_selected",
            Command::DeleteSelected => "delete_selected",
        }
    }

    /// Accepts snake_case names as well as camelCase / kebab-case spellings.
    pub fn from_name(name: &str) -> Option<Command> {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        Command::ALL.into_iter().find(|cmd| {
            cmd.name()
                .chars()
                .filter(|c| *c != '_')
                .eq(normalized.chars())
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
