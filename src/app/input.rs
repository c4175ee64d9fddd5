use super::TodoApp;
use crate::core::event::{InputEvent, Key, KeyEvent, KeyEventKind};
use crate::core::view::EventResult;
use crate::core::Command;
use crate::kernel::{Action, FocusTarget};
use crate::services::KeybindingContext;

pub(super) fn handle_input(app: &mut TodoApp, event: &InputEvent) -> EventResult {
    match event {
        InputEvent::Key(key) => app.handle_key(key),
        InputEvent::Mouse(mouse) => app.handle_mouse(mouse),
        InputEvent::Paste(text) => {
            app.dispatch(Action::SetFocus(FocusTarget::Input));
            app.dispatch(Action::InputInsertStr(text.clone()));
            EventResult::Consumed
        }
        InputEvent::Resize(w, h) => {
            tracing::debug!(w, h, "resize");
            app.mark_dirty();
            EventResult::Consumed
        }
        InputEvent::FocusGained | InputEvent::FocusLost => EventResult::Ignored,
    }
}

impl TodoApp {
    fn key_context(&self) -> KeybindingContext {
        match self.state().focus() {
            FocusTarget::Input => KeybindingContext::Input,
            FocusTarget::List => KeybindingContext::List,
        }
    }

    fn handle_key(&mut self, event: &KeyEvent) -> EventResult {
        if event.kind == KeyEventKind::Release {
            return EventResult::Ignored;
        }

        let key = Key::from(*event);
        if let Some(command) = self.keybindings.resolve(self.key_context(), &key) {
            return self.run_command(command);
        }

        if self.state().focus() == FocusTarget::Input {
            if let Some(ch) = event.text_char() {
                self.dispatch(Action::InputInsert(ch));
                return EventResult::Consumed;
            }
        }
        EventResult::Ignored
    }

    pub(super) fn run_command(&mut self, command: Command) -> EventResult {
        tracing::debug!(command = command.name(), "command");
        let action = match command {
            Command::Quit => return EventResult::Quit,
            Command::ToggleFocus => Action::ToggleFocus,
            Command::FocusInput => Action::SetFocus(FocusTarget::Input),
            Command::FocusList => Action::SetFocus(FocusTarget::List),
            Command::Submit => Action::AddTask,
            Command::ClearInput => Action::InputClear,
            Command::CursorLeft => Action::InputCursorLeft,
            Command::CursorRight => Action::InputCursorRight,
            Command::CursorHome => Action::InputCursorHome,
            Command::CursorEnd => Action::InputCursorEnd,
            Command::DeleteBackward => Action::InputBackspace,
            Command::DeleteForward => Action::InputDelete,
            Command::SelectPrev => Action::MoveSelection { delta: -1 },
            Command::SelectNext => Action::MoveSelection { delta: 1 },
            Command::SelectFirst => Action::MoveSelection { delta: isize::MIN },
            Command::SelectLast => Action::MoveSelection { delta: isize::MAX },
            Command::ToggleSelected => Action::ToggleSelected,
            Command::DeleteSelected => Action::DeleteSelected,
        };
        self.dispatch(action);
        EventResult::Consumed
    }
}
