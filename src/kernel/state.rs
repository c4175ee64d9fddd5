use super::id::{IdGenerator, TaskId};
use super::stats::TaskStats;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    /// Trimmed, never empty.
    pub text: String,
    pub completed: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FocusTarget {
    #[default]
    Input,
    List,
}

/// The whole component state: the task list, the pending input and the bits
/// of UI state (focus, caret, selection) the renderer needs.
///
/// Every mutator returns whether anything changed so the caller can decide to
/// repaint.
#[derive(Clone, Debug, Default)]
pub struct TodoState {
    tasks: Vec<Task>,
    pending_input: String,
    /// Caret position in chars, `0..=pending_input.chars().count()`.
    input_cursor: usize,
    focus: FocusTarget,
    selected: Option<usize>,
    ids: IdGenerator,
}

impl TodoState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn input_cursor(&self) -> usize {
        self.input_cursor
    }

    pub fn focus(&self) -> FocusTarget {
        self.focus
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.selected.and_then(|idx| self.tasks.get(idx))
    }

    pub fn stats(&self) -> TaskStats {
        TaskStats::from_tasks(&self.tasks)
    }

    // ---------------------------------------------------------------------
    // Task mutators
    // ---------------------------------------------------------------------

    /// Appends a task built from `text` (trimmed) and clears the pending input.
    /// Whitespace-only text is ignored.
    pub fn add_task(&mut self, text: &str) -> Option<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let id = self.ids.next_id();
        self.tasks.push(Task {
            id,
            text: text.to_string(),
            completed: false,
        });
        self.pending_input.clear();
        self.input_cursor = 0;
        Some(id)
    }

    /// Submits the pending input as a new task.
    pub fn submit_pending(&mut self) -> Option<TaskId> {
        let text = std::mem::take(&mut self.pending_input);
        let id = self.add_task(&text);
        if id.is_none() {
            self.pending_input = text;
        }
        id
    }

    pub fn toggle_task(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        task.completed = !task.completed;
        true
    }

    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let Some(idx) = self.tasks.iter().position(|t| t.id == id) else {
            return false;
        };
        self.tasks.remove(idx);

        self.selected = match self.selected {
            _ if self.tasks.is_empty() => None,
            Some(sel) if idx < sel => Some(sel - 1),
            Some(sel) => Some(sel.min(self.tasks.len() - 1)),
            None => None,
        };
        true
    }

    /// Replaces the pending input verbatim and moves the caret to its end.
    pub fn set_pending_input(&mut self, text: &str) -> bool {
        let len = text.chars().count();
        let changed = self.pending_input != text || self.input_cursor != len;
        self.pending_input.clear();
        self.pending_input.push_str(text);
        self.input_cursor = len;
        changed
    }

    // ---------------------------------------------------------------------
    // Pending-input editing
    // ---------------------------------------------------------------------

    pub fn insert_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        let at = self.cursor_byte_offset();
        self.pending_input.insert(at, ch);
        self.input_cursor += 1;
        true
    }

    /// Inserts pasted text at the caret. Line breaks become spaces; other
    /// control characters are dropped.
    pub fn insert_str(&mut self, text: &str) -> bool {
        let cleaned: String = text
            .chars()
            .filter_map(|ch| match ch {
                '\r' => None,
                '\n' | '\t' => Some(' '),
                c if c.is_control() => None,
                c => Some(c),
            })
            .collect();
        if cleaned.is_empty() {
            return false;
        }
        let at = self.cursor_byte_offset();
        self.pending_input.insert_str(at, &cleaned);
        self.input_cursor += cleaned.chars().count();
        true
    }

    pub fn backspace(&mut self) -> bool {
        if self.input_cursor == 0 {
            return false;
        }
        self.input_cursor -= 1;
        let at = self.cursor_byte_offset();
        self.pending_input.remove(at);
        true
    }

    pub fn delete_forward(&mut self) -> bool {
        if self.input_cursor >= self.input_len() {
            return false;
        }
        let at = self.cursor_byte_offset();
        self.pending_input.remove(at);
        true
    }

    pub fn cursor_left(&mut self) -> bool {
        if self.input_cursor == 0 {
            return false;
        }
        self.input_cursor -= 1;
        true
    }

    pub fn cursor_right(&mut self) -> bool {
        if self.input_cursor >= self.input_len() {
            return false;
        }
        self.input_cursor += 1;
        true
    }

    pub fn cursor_home(&mut self) -> bool {
        let changed = self.input_cursor != 0;
        self.input_cursor = 0;
        changed
    }

    pub fn cursor_end(&mut self) -> bool {
        let end = self.input_len();
        let changed = self.input_cursor != end;
        self.input_cursor = end;
        changed
    }

    pub fn clear_input(&mut self) -> bool {
        let changed = !self.pending_input.is_empty();
        self.pending_input.clear();
        self.input_cursor = 0;
        changed
    }

    fn input_len(&self) -> usize {
        self.pending_input.chars().count()
    }

    fn cursor_byte_offset(&self) -> usize {
        self.pending_input
            .char_indices()
            .nth(self.input_cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.pending_input.len())
    }

    // ---------------------------------------------------------------------
    // Focus and selection
    // ---------------------------------------------------------------------

    /// Focusing the list selects its first row if nothing is selected yet.
    pub fn set_focus(&mut self, focus: FocusTarget) -> bool {
        let prev_focus = self.focus;
        let prev_selected = self.selected;
        self.focus = focus;
        if focus == FocusTarget::List && self.selected.is_none() && !self.tasks.is_empty() {
            self.selected = Some(0);
        }
        prev_focus != self.focus || prev_selected != self.selected
    }

    pub fn toggle_focus(&mut self) -> bool {
        let next = match self.focus {
            FocusTarget::Input => FocusTarget::List,
            FocusTarget::List => FocusTarget::Input,
        };
        self.set_focus(next)
    }

    pub fn move_selection(&mut self, delta: isize) -> bool {
        if self.tasks.is_empty() {
            return false;
        }
        let last = self.tasks.len() - 1;
        let current = self.selected.unwrap_or(0).min(last);
        let next = if delta.is_negative() {
            current.saturating_sub(delta.unsigned_abs())
        } else {
            current.saturating_add(delta as usize).min(last)
        };
        let changed = self.selected != Some(next);
        self.selected = Some(next);
        changed
    }

    pub fn select_row(&mut self, index: usize) -> bool {
        if index >= self.tasks.len() {
            return false;
        }
        let changed = self.selected != Some(index) || self.focus != FocusTarget::List;
        self.selected = Some(index);
        self.focus = FocusTarget::List;
        changed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
