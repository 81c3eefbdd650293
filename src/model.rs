//! In-memory task list state.
//!
//! The list is the whole data model of the application: an ordered sequence
//! of immutable tasks, newest first, mutated only by `add` and `remove`.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::utils::datetime;

/// Opaque task identifier, stable for the task's lifetime.
pub type TaskId = Uuid;

/// A single todo entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub due_date: NaiveDate,
}

impl Task {
    /// Due date formatted as fixed-width `YYYY-MM-DD`.
    pub fn due_ymd(&self) -> String {
        datetime::format_ymd(self.due_date)
    }
}

/// Ordered task sequence with newest-first insertion order.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a task from the trimmed title and the given due date.
    ///
    /// The new task is prepended to the list. An empty-after-trim title is a
    /// silent no-op and returns `None`.
    pub fn add(&mut self, title: &str, due: NaiveDate) -> Option<TaskId> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }

        let id = Uuid::new_v4();
        self.tasks.insert(
            0,
            Task {
                id,
                title: title.to_string(),
                due_date: due,
            },
        );
        Some(id)
    }

    /// Remove the task with the given id. Removing an absent id is a no-op.
    pub fn remove(&mut self, id: TaskId) {
        self.tasks.retain(|task| task.id != id);
    }

    /// The full ordered sequence, newest first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
