//! In-memory task list and the operations that mutate it.
//!
//! [`TaskListController`] owns three pieces of state:
//! - the ordered task list (display order is insertion order)
//! - the [`InputBuffer`] holding text not yet committed
//! - an optional edit cursor naming the task loaded into the buffer
//!
//! Everything here is synchronous and lives only as long as the controller.

mod input;

pub use input::InputBuffer;

use thiserror::Error;
use tracing::{debug, warn};

/// Errors reported by [`TaskListController`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    /// A row index did not name an existing task.
    #[error("task index {index} out of range (list has {len} tasks)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// What a commit action will do with the input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// Append the input as a new task.
    Create,
    /// Overwrite the task at the given index.
    UpdateAt(usize),
}

impl Commit {
    /// Label shown on the commit button.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Create => "Submit",
            Self::UpdateAt(_) => "Save",
        }
    }
}

/// Owns the task list, the input buffer and the edit cursor.
///
/// Invariant: when `editing` is `Some(i)`, `i < tasks.len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskListController {
    tasks: Vec<String>,
    input: InputBuffer,
    editing: Option<usize>,
}

impl TaskListController {
    /// Create an empty controller.
    pub const fn new() -> Self {
        Self {
            tasks: Vec::new(),
            input: InputBuffer::new(),
            editing: None,
        }
    }

    /// Seed the list with initial tasks.
    #[must_use]
    pub fn with_tasks<I, S>(mut self, tasks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tasks.extend(tasks.into_iter().map(Into::into));
        self
    }

    pub fn tasks(&self) -> &[String] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    /// Mutable access for keystroke-level editing of the buffer.
    pub const fn input_mut(&mut self) -> &mut InputBuffer {
        &mut self.input
    }

    /// Index of the task currently loaded into the input buffer.
    pub const fn edit_cursor(&self) -> Option<usize> {
        self.editing
    }

    pub const fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Replace the input buffer unconditionally.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input.set(text);
    }

    /// What [`save`](Self::save) would do right now.
    pub const fn pending_commit(&self) -> Commit {
        match self.editing {
            Some(index) => Commit::UpdateAt(index),
            None => Commit::Create,
        }
    }

    /// Label for the commit button: "Submit" or "Save".
    pub const fn commit_label(&self) -> &'static str {
        self.pending_commit().label()
    }

    /// Append the input as a new task.
    ///
    /// Blank input is ignored. Returns whether a task was appended.
    pub fn add(&mut self) -> bool {
        if self.input.is_blank() {
            return false;
        }
        let text = self.input.take();
        debug!(index = self.tasks.len(), "task added");
        self.tasks.push(text);
        true
    }

    /// Commit the input according to the current mode.
    ///
    /// Updates the task under edit, or appends a new task when nothing is
    /// being edited. Blank input is ignored in both modes.
    pub fn save(&mut self) -> bool {
        let commit = self.pending_commit();
        match self.commit(commit) {
            Ok(changed) => changed,
            Err(err) => {
                // Only reachable if the cursor invariant was broken.
                warn!(%err, "dropping stale edit cursor");
                self.editing = None;
                false
            }
        }
    }

    /// Apply an explicit commit.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::IndexOutOfRange`] when `UpdateAt` names a row
    /// that does not exist.
    pub fn commit(&mut self, commit: Commit) -> Result<bool, TaskError> {
        match commit {
            Commit::Create => Ok(self.add()),
            Commit::UpdateAt(index) => {
                let len = self.tasks.len();
                let Some(slot) = self.tasks.get_mut(index) else {
                    return Err(TaskError::IndexOutOfRange { index, len });
                };
                if self.input.is_blank() {
                    return Ok(false);
                }
                *slot = self.input.take();
                self.editing = None;
                debug!(index, "task updated");
                Ok(true)
            }
        }
    }

    /// Abandon the current draft or edit.
    pub fn cancel(&mut self) {
        self.input.clear();
        self.editing = None;
    }

    /// Remove the task at `index` and return its text.
    ///
    /// Any edit in progress is detached from its row; the input keeps its
    /// text as a new-entry draft.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::IndexOutOfRange`] if `index` is not a valid row.
    pub fn delete(&mut self, index: usize) -> Result<String, TaskError> {
        self.check_index(index)?;
        let removed = self.tasks.remove(index);
        self.editing = None;
        debug!(index, remaining = self.tasks.len(), "task deleted");
        Ok(removed)
    }

    /// Load the task at `index` into the input buffer for editing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::IndexOutOfRange`] if `index` is not a valid row.
    pub fn edit(&mut self, index: usize) -> Result<(), TaskError> {
        self.check_index(index)?;
        self.input.set(self.tasks[index].clone());
        self.editing = Some(index);
        debug!(index, "editing task");
        Ok(())
    }

    const fn check_index(&self, index: usize) -> Result<(), TaskError> {
        let len = self.tasks.len();
        if index < len {
            Ok(())
        } else {
            Err(TaskError::IndexOutOfRange { index, len })
        }
    }
}
