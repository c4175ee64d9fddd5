//! Key chord -> command maps, one per focus context.
//!
//! Lookups in `Input` and `List` fall back to `Global`.

use super::settings::{format_keybinding, parse_keybinding, KeybindingRule};
use crate::core::event::{Key, KeyCode, KeyModifiers};
use crate::core::Command;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeybindingContext {
    Global,
    Input,
    List,
}

impl KeybindingContext {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "global" => Some(Self::Global),
            "input" | "entry" | "textinput" | "text_input" => Some(Self::Input),
            "list" | "tasks" | "tasklist" | "task_list" => Some(Self::List),
            _ => None,
        }
    }
}

pub struct KeybindingService {
    global: FxHashMap<Key, Command>,
    input: FxHashMap<Key, Command>,
    list: FxHashMap<Key, Command>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn empty() -> Self {
        Self {
            global: FxHashMap::default(),
            input: FxHashMap::default(),
            list: FxHashMap::default(),
        }
    }

    pub fn with_defaults() -> Self {
        Self {
            global: default_global_keybindings(),
            input: default_input_keybindings(),
            list: default_list_keybindings(),
        }
    }

    pub fn resolve(&self, context: KeybindingContext, key: &Key) -> Option<Command> {
        match context {
            KeybindingContext::Global => self.global.get(key),
            KeybindingContext::Input => self.input.get(key).or_else(|| self.global.get(key)),
            KeybindingContext::List => self.list.get(key).or_else(|| self.global.get(key)),
        }
        .copied()
    }

    pub fn bindings(&self, context: KeybindingContext) -> &FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &self.global,
            KeybindingContext::Input => &self.input,
            KeybindingContext::List => &self.list,
        }
    }

    pub fn bind(&mut self, context: KeybindingContext, key: Key, command: Command) {
        self.map_mut(context).insert(key, command);
    }

    pub fn unbind(&mut self, context: KeybindingContext, key: &Key) -> Option<Command> {
        self.map_mut(context).remove(key)
    }

    /// Keys that reach `command` from `context`, shortest spelling first.
    ///
    /// A global key shadowed by a context binding is not reported.
    pub fn keys_for_command(&self, context: KeybindingContext, command: Command) -> Vec<Key> {
        let mut keys: Vec<Key> = self
            .bindings(context)
            .iter()
            .filter(|(_, cmd)| **cmd == command)
            .map(|(key, _)| *key)
            .collect();
        if context != KeybindingContext::Global {
            keys.extend(
                self.global
                    .iter()
                    .filter(|(key, cmd)| {
                        **cmd == command && !self.bindings(context).contains_key(*key)
                    })
                    .map(|(key, _)| *key),
            );
        }
        keys.sort_by_cached_key(|k| {
            let s = format_keybinding(k);
            (s.len(), s)
        });
        keys
    }

    /// Applies user rules on top of the current maps. Returns how many were
    /// applied; invalid rules are logged and skipped.
    pub fn apply_rules(&mut self, rules: &[KeybindingRule]) -> usize {
        let mut applied = 0;
        for rule in rules {
            let context = match rule.context.as_deref() {
                None => KeybindingContext::Global,
                Some(name) => match KeybindingContext::parse(name) {
                    Some(ctx) => ctx,
                    None => {
                        tracing::warn!(context = name, "unknown keybinding context");
                        continue;
                    }
                },
            };
            let Some(key) = parse_keybinding(&rule.key) else {
                tracing::warn!(key = %rule.key, "unparseable keybinding");
                continue;
            };
            // A leading '-' removes the binding instead.
            if let Some(name) = rule.command.strip_prefix('-') {
                if Command::from_name(name).is_some() {
                    self.unbind(context, &key);
                    applied += 1;
                } else {
                    tracing::warn!(command = %rule.command, "unknown command");
                }
                continue;
            }
            let Some(command) = Command::from_name(&rule.command) else {
                tracing::warn!(command = %rule.command, "unknown command");
                continue;
            };
            tracing::debug!(?context, key = %rule.key, command = command.name(), "keybinding");
            self.bind(context, key, command);
            applied += 1;
        }
        applied
    }

    fn map_mut(&mut self, context: KeybindingContext) -> &mut FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &mut self.global,
            KeybindingContext::Input => &mut self.input,
            KeybindingContext::List => &mut self.list,
        }
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_global_keybindings() -> FxHashMap<Key, Command> {
    let mut map = FxHashMap::default();
    map.insert(Key::ctrl(KeyCode::Char('c')), Command::Quit);
    map.insert(Key::ctrl(KeyCode::Char('q')), Command::Quit);
    map.insert(Key::simple(KeyCode::Tab), Command::ToggleFocus);
    map.insert(Key::simple(KeyCode::BackTab), Command::ToggleFocus);
    map
}

fn default_input_keybindings() -> FxHashMap<Key, Command> {
    let mut map = FxHashMap::default();
    map.insert(Key::simple(KeyCode::Enter), Command::Submit);
    map.insert(Key::simple(KeyCode::Esc), Command::FocusList);
    map.insert(Key::simple(KeyCode::Down), Command::FocusList);
    map.insert(Key::ctrl(KeyCode::Char('u')), Command::ClearInput);
    map.insert(Key::simple(KeyCode::Left), Command::CursorLeft);
    map.insert(Key::simple(KeyCode::Right), Command::CursorRight);
    map.insert(Key::simple(KeyCode::Home), Command::CursorHome);
    map.insert(Key::simple(KeyCode::End), Command::CursorEnd);
    map.insert(Key::ctrl(KeyCode::Char('a')), Command::CursorHome);
    map.insert(Key::ctrl(KeyCode::Char('e')), Command::CursorEnd);
    map.insert(Key::simple(KeyCode::Backspace), Command::DeleteBackward);
    map.insert(Key::simple(KeyCode::Delete), Command::DeleteForward);
    map
}

fn default_list_keybindings() -> FxHashMap<Key, Command> {
    let mut map = FxHashMap::default();
    map.insert(Key::simple(KeyCode::Up), Command::SelectPrev);
    map.insert(Key::char('k'), Command::SelectPrev);
    map.insert(Key::simple(KeyCode::Down), Command::SelectNext);
    map.insert(Key::char('j'), Command::SelectNext);
    map.insert(Key::simple(KeyCode::Home), Command::SelectFirst);
    map.insert(Key::char('g'), Command::SelectFirst);
    map.insert(Key::simple(KeyCode::End), Command::SelectLast);
    map.insert(Key::new(KeyCode::Char('g'), KeyModifiers::SHIFT), Command::SelectLast);
    map.insert(Key::char(' '), Command::ToggleSelected);
    map.insert(Key::simple(KeyCode::Enter), Command::ToggleSelected);
    map.insert(Key::char('d'), Command::DeleteSelected);
    map.insert(Key::simple(KeyCode::Delete), Command::DeleteSelected);
    map.insert(Key::char('i'), Command::FocusInput);
    map.insert(Key::char('a'), Command::FocusInput);
    map.insert(Key::simple(KeyCode::Esc), Command::FocusInput);
    map.insert(Key::char('q'), Command::Quit);
    map
}

#[cfg(test)]
#[path = "../../tests/unit/services/keybinding.rs"]
mod tests;
