use crate::error::{Result, TaskError};
use crate::models::Task;
use crate::persist;
use std::path::Path;
use tracing::{debug, info, warn};

/// Result of [`TaskStore::load_from`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was read; holds the number of tasks now in the store
    Loaded(usize),
    /// No file at the given path; the store was emptied
    SourceNotFound,
}

/// Ordered, in-memory to-do list.
///
/// Tasks are addressed by their 1-based position in the list. Positions are
/// not stable: deleting a task shifts every later task down by one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        TaskStore { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Task at a 1-based position
    pub fn get(&self, position: usize) -> Option<&Task> {
        let index = position.checked_sub(1)?;
        self.tasks.get(index)
    }

    // ==================== List Operations ====================

    /// Append a new open task
    pub fn add(&mut self, title: impl Into<String>) -> &Task {
        self.tasks.push(Task::new(title));
        debug!(position = self.tasks.len(), "added task");
        &self.tasks[self.tasks.len() - 1]
    }

    /// Iterate tasks in order, paired with their 1-based position
    pub fn enumerate(&self) -> impl Iterator<Item = (usize, &Task)> + '_ {
        self.tasks
            .iter()
            .enumerate()
            .map(|(index, task)| (index + 1, task))
    }

    pub fn mark_completed(&mut self, position: usize) -> Result<()> {
        let index = self.index_of(position)?;
        self.tasks[index].complete();
        debug!(position, "marked task completed");
        Ok(())
    }

    /// Remove the task at `position` and return it
    pub fn delete(&mut self, position: usize) -> Result<Task> {
        let index = self.index_of(position)?;
        let task = self.tasks.remove(index);
        debug!(position, remaining = self.tasks.len(), "deleted task");
        Ok(task)
    }

    fn index_of(&self, position: usize) -> Result<usize> {
        if (1..=self.tasks.len()).contains(&position) {
            Ok(position - 1)
        } else {
            Err(TaskError::InvalidPosition {
                position,
                len: self.tasks.len(),
            })
        }
    }

    // ==================== Persistence ====================

    /// Overwrite `path` with the current list
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        persist::write_tasks(path, &self.tasks)?;
        info!(path = %path.display(), count = self.tasks.len(), "saved tasks");
        Ok(())
    }

    /// Replace the list with the tasks stored at `path`.
    ///
    /// A missing file empties the store and reports
    /// [`LoadOutcome::SourceNotFound`]. On any error the store is unchanged.
    pub fn load_from<P: AsRef<Path>>(&mut self, path: P) -> Result<LoadOutcome> {
        let path = path.as_ref();
        match persist::read_tasks(path)? {
            Some(tasks) => {
                self.tasks = tasks;
                info!(path = %path.display(), count = self.tasks.len(), "loaded tasks");
                Ok(LoadOutcome::Loaded(self.tasks.len()))
            }
            None => {
                self.tasks.clear();
                warn!(path = %path.display(), "task file not found, starting empty");
                Ok(LoadOutcome::SourceNotFound)
            }
        }
    }

    /// Append the current list after the tasks already stored at `path` and
    /// write the result back. The in-memory list is left as it was.
    ///
    /// Returns the number of tasks written. The file is rewritten in place,
    /// so a write that fails partway can lose the previously stored tasks.
    pub fn merge_and_save_to<P: AsRef<Path>>(&self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let mut merged = persist::read_tasks(path)?.unwrap_or_default();
        let existing = merged.len();
        merged.extend(self.tasks.iter().cloned());

        persist::write_tasks(path, &merged)?;
        info!(
            path = %path.display(),
            existing,
            added = self.tasks.len(),
            "merged tasks"
        );
        Ok(merged.len())
    }
}

impl FromIterator<Task> for TaskStore {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        TaskStore::from_tasks(iter.into_iter().collect())
    }
}
