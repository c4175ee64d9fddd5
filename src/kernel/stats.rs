use super::state::Task;

/// Counts derived from the task list. Never stored; rebuilt on every read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        Self {
            total: tasks.len(),
            completed: tasks.iter().filter(|t| t.completed).count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn remaining(&self) -> usize {
        self.total - self.completed
    }

    /// Completion in `0.0..=100.0`; 0 for an empty list.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 / self.total as f64 * 100.0
    }

    /// Completion in `0.0..=1.0`; 0 for an empty list.
    pub fn ratio(&self) -> f64 {
        self.percent() / 100.0
    }

    pub fn rounded_percent(&self) -> u8 {
        self.percent().round().clamp(0.0, 100.0) as u8
    }
}

pub fn task_noun(count: usize) -> &'static str {
    if count == 1 {
        "task"
    } else {
        "tasks"
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/stats.rs"]
mod tests;
