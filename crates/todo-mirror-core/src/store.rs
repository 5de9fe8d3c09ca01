//! In-memory mirror of the remote task collection.

use crate::id::TaskId;
use crate::task::Task;

/// Ordered collection of persisted tasks plus the single speculative
/// placeholder slot.
///
/// The store performs no synchronization of its own; it assumes a single
/// writer that serializes every mutation. Position in the collection is
/// insertion order and survives in-place replacement.
#[derive(Debug, Default, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    placeholder: Option<Task>,
}

impl TaskStore {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tasks: Vec::new(),
            placeholder: None,
        }
    }

    /// Persisted tasks in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a persisted task by id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Replace the whole collection, used when seeding from the remote side.
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Append a persisted task.
    ///
    /// Ids must be unique and non-provisional; violating either is a bug in
    /// the caller, not a recoverable condition.
    pub fn insert(&mut self, task: Task) {
        debug_assert!(
            !task.id.is_provisional(),
            "provisional id in persisted collection"
        );
        debug_assert!(self.get(task.id).is_none(), "duplicate task id {}", task.id);
        self.tasks.push(task);
    }

    /// Replace the task with the matching id in place, preserving position.
    ///
    /// A missing id is a no-op; this covers a delete racing an update.
    pub fn replace(&mut self, id: TaskId, updated: Task) {
        if let Some(slot) = self.tasks.iter_mut().find(|task| task.id == id) {
            *slot = updated;
        }
    }

    /// Remove the task with the matching id; no-op when absent.
    pub fn remove(&mut self, id: TaskId) {
        self.tasks.retain(|task| task.id != id);
    }

    /// Set or clear the speculative placeholder.
    pub fn set_placeholder(&mut self, placeholder: Option<Task>) {
        self.placeholder = placeholder;
    }

    /// The speculative placeholder, if a create call is in flight.
    #[must_use]
    pub fn placeholder(&self) -> Option<&Task> {
        self.placeholder.as_ref()
    }
}
