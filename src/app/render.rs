use super::TodoApp;
use crate::core::Command;
use crate::kernel::FocusTarget;
use crate::services::settings::format_keybinding;
use crate::services::KeybindingContext;
use crate::ui::backend::Backend;
use crate::ui::core::geom::Rect;
use crate::ui::core::widget::Ui;
use crate::views::todo::{self, RenderContext};

const INPUT_HINTS: [(Command, &str); 3] = [
    (Command::Submit, "add"),
    (Command::ToggleFocus, "tasks"),
    (Command::Quit, "quit"),
];

const LIST_HINTS: [(Command, &str); 4] = [
    (Command::ToggleSelected, "toggle"),
    (Command::DeleteSelected, "delete"),
    (Command::FocusInput, "new task"),
    (Command::Quit, "quit"),
];

pub(super) fn render(app: &mut TodoApp, backend: &mut dyn Backend, area: Rect) {
    let footer = app.show_key_hints.then(|| key_hints(app));

    let state = app.store.state();
    let tree = todo::build(state.tasks(), state.pending_input(), &app.view_config);
    let ctx = RenderContext {
        focus: state.focus(),
        selected: state.selected(),
        input_cursor: state.input_cursor(),
        styles: &app.styles,
        footer: footer.as_deref(),
    };

    app.painter.clear();
    app.ui_tree.clear();
    let out = {
        let mut ui = Ui::new(area, &mut app.painter, &mut app.ui_tree);
        todo::render(&tree, &mut ui, &ctx)
    };

    backend.draw(area, app.painter.cmds());
    backend.set_cursor(out.cursor);
    app.last_render = out;
    app.dirty = false;
}

/// `enter add · tab tasks · ctrl+c quit`, built from the live key map so
/// user overrides show up. Commands with no key are left out.
fn key_hints(app: &TodoApp) -> String {
    let (context, hints) = match app.state().focus() {
        FocusTarget::Input => (KeybindingContext::Input, &INPUT_HINTS[..]),
        FocusTarget::List => (KeybindingContext::List, &LIST_HINTS[..]),
    };
    hints
        .iter()
        .filter_map(|(command, label)| {
            let key = app.keybindings.keys_for_command(context, *command).into_iter().next()?;
            Some(format!("{} {}", format_keybinding(&key), label))
        })
        .collect::<Vec<_>>()
        .join(" · ")
}
