use crate::error::{Result, TaskError};
use serde::{Deserialize, Serialize};

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub title: String,
    pub completed: bool,
}

impl Task {
    pub fn new(title: impl Into<String>) -> Self {
        Task {
            title: title.into(),
            completed: false,
        }
    }

    /// Marking an already completed task changes nothing
    pub fn complete(&mut self) {
        self.completed = true;
    }

    pub fn icon(&self) -> &'static str {
        if self.completed {
            "✓"
        } else {
            "✗"
        }
    }
}

/// On-disk shape of a task while decoding.
///
/// `completed` falls back to `false` when absent. `title` has no fallback:
/// a record without one is rejected by [`TaskRecord::into_task`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskRecord {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl TaskRecord {
    /// `index` is the 0-based position of the record in the persisted array
    pub fn into_task(self, index: usize) -> Result<Task> {
        let title = self.title.ok_or(TaskError::MalformedRecord { index })?;
        Ok(Task {
            title,
            completed: self.completed.unwrap_or(false),
        })
    }
}
