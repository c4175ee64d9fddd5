//! The todo component wired to a frontend: routes input events to kernel
//! actions and paints the current state.

mod input;
mod mouse;
mod render;
pub mod theme;

pub use theme::{parse_color, UiTheme};

use crate::core::event::InputEvent;
use crate::core::view::{EventResult, View};
use crate::kernel::{Action, Store, TodoState};
use crate::services::{KeybindingService, Settings};
use crate::ui::backend::Backend;
use crate::ui::core::geom::Rect;
use crate::ui::core::painter::Painter;
use crate::ui::core::tree::UiTree;
use crate::views::todo::{RenderOutput, TodoStyles, ViewConfig};

pub struct TodoApp {
    store: Store,
    view_config: ViewConfig,
    styles: TodoStyles,
    keybindings: KeybindingService,
    show_key_hints: bool,
    painter: Painter,
    /// Hit-test nodes from the last frame; mouse clicks are resolved against it.
    ui_tree: UiTree,
    last_render: RenderOutput,
    dirty: bool,
}

impl TodoApp {
    pub fn new() -> Self {
        Self::from_settings(&Settings::default())
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut theme = UiTheme::default();
        theme.apply_settings(&settings.theme);

        let mut view_config = ViewConfig::default();
        if let Some(title) = &settings.view.title {
            view_config.title = title.clone();
        }
        if let Some(subtitle) = &settings.view.subtitle {
            view_config.subtitle = subtitle.clone();
        }
        if let Some(placeholder) = &settings.view.placeholder {
            view_config.placeholder = placeholder.clone();
        }

        let mut keybindings = KeybindingService::with_defaults();
        let applied = keybindings.apply_rules(&settings.keybindings);
        if applied > 0 {
            tracing::info!(applied, "custom keybindings applied");
        }

        Self {
            store: Store::new(TodoState::new()),
            view_config,
            styles: theme.to_styles(),
            keybindings,
            show_key_hints: settings.view.show_key_hints.unwrap_or(true),
            painter: Painter::new(),
            ui_tree: UiTree::new(),
            last_render: RenderOutput::default(),
            dirty: true,
        }
    }

    pub fn state(&self) -> &TodoState {
        self.store.state()
    }

    pub fn ui_tree(&self) -> &UiTree {
        &self.ui_tree
    }

    pub fn last_render(&self) -> RenderOutput {
        self.last_render
    }

    pub fn keybindings(&self) -> &KeybindingService {
        &self.keybindings
    }

    /// Sends `action` through the store. Returns whether the state changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let result = self.store.dispatch(action);
        if result.state_changed {
            self.dirty = true;
        }
        result.state_changed
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

impl Default for TodoApp {
    fn default() -> Self {
        Self::new()
    }
}

impl View for TodoApp {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        input::handle_input(self, event)
    }

    fn render(&mut self, backend: &mut dyn Backend, area: Rect) {
        render::render(self, backend, area);
    }

    fn needs_redraw(&self) -> bool {
        self.dirty
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/todo_app.rs"]
mod tests;
