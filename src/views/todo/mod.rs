//! Presentation mapper: task list + pending input -> visual tree.
//!
//! `build` is pure and knows nothing about cells or colours; `render` lays the
//! tree out and paints it.

mod render;

pub use render::{render, RenderContext, RenderOutput, TodoStyles, COLUMN_MAX_WIDTH};

use crate::kernel::{task_noun, Task, TaskId, TaskStats};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewConfig {
    pub title: String,
    pub subtitle: String,
    pub placeholder: String,
    pub add_label: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            title: "My Todo List".to_string(),
            subtitle: "Stay organized and get things done".to_string(),
            placeholder: "Add a new task...".to_string(),
            add_label: "+ Add".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TodoTree {
    pub header: Header,
    pub input: InputRow,
    pub stats: Option<StatsRow>,
    pub list: TaskList,
    pub progress: Option<Progress>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    pub title: String,
    pub subtitle: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputRow {
    pub text: String,
    pub placeholder: String,
    pub add_label: String,
    /// False while the trimmed input is empty.
    pub submit_enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatsRow {
    pub total_label: String,
    pub completed_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TaskList {
    Empty(EmptyState),
    Rows(Vec<TaskRow>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmptyState {
    pub headline: String,
    pub hint: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskRow {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Progress {
    pub label: String,
    pub percent_label: String,
    /// Filled fraction of the bar, `0.0..=1.0`.
    pub ratio: f64,
}

pub fn build(tasks: &[Task], pending_input: &str, config: &ViewConfig) -> TodoTree {
    let stats = TaskStats::from_tasks(tasks);

    let input = InputRow {
        text: pending_input.to_string(),
        placeholder: config.placeholder.clone(),
        add_label: config.add_label.clone(),
        submit_enabled: !pending_input.trim().is_empty(),
    };

    if stats.is_empty() {
        return TodoTree {
            header: header(config),
            input,
            stats: None,
            list: TaskList::Empty(EmptyState {
                headline: "No tasks yet".to_string(),
                hint: "Add your first task above to get started!".to_string(),
            }),
            progress: None,
        };
    }

    let rows = tasks
        .iter()
        .map(|t| TaskRow {
            id: t.id,
            text: t.text.clone(),
            completed: t.completed,
        })
        .collect();

    TodoTree {
        header: header(config),
        input,
        stats: Some(StatsRow {
            total_label: format!("{} {} total", stats.total, task_noun(stats.total)),
            completed_label: format!("{} completed", stats.completed),
        }),
        list: TaskList::Rows(rows),
        progress: Some(Progress {
            label: "Progress".to_string(),
            percent_label: format!("{}%", stats.rounded_percent()),
            ratio: stats.ratio(),
        }),
    }
}

fn header(config: &ViewConfig) -> Header {
    Header {
        title: config.title.clone(),
        subtitle: config.subtitle.clone(),
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/views/todo.rs"]
mod tests;
