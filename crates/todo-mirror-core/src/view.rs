//! Pure filtered views over the task store.

use serde::{Deserialize, Serialize};

use crate::store::TaskStore;
use crate::task::Task;

/// Which slice of the collection a view shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// Every task.
    #[default]
    All,
    /// Tasks not yet completed.
    Active,
    /// Completed tasks.
    Completed,
}

impl FilterMode {
    /// Whether the task belongs in a view with this filter.
    #[must_use]
    pub const fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

/// Aggregate counters derived from the persisted collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    /// Tasks with `completed == false`.
    pub active: usize,
    /// Tasks with `completed == true`.
    pub completed: usize,
    /// Every persisted task.
    pub total: usize,
}

impl TaskCounts {
    /// Tally the collection.
    #[must_use]
    pub fn of(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|task| task.completed).count();
        Self {
            active: tasks.len() - completed,
            completed,
            total: tasks.len(),
        }
    }

    /// True when the collection is non-empty and fully completed.
    #[must_use]
    pub const fn all_completed(&self) -> bool {
        self.completed == self.total && self.total > 0
    }
}

/// Filtered, ordered snapshot of the store for one render pass.
///
/// The placeholder is never part of the filtered sequence; callers render it
/// as a trailing entry regardless of the active filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Projection {
    /// Tasks matching the filter, in insertion order.
    pub visible: Vec<Task>,
    /// Speculative placeholder, when a create call is in flight.
    pub placeholder: Option<Task>,
    /// Counters over the full, unfiltered collection.
    pub counts: TaskCounts,
}

impl Projection {
    /// Project the store through the given filter.
    #[must_use]
    pub fn of(store: &TaskStore, filter: FilterMode) -> Self {
        Self {
            visible: store
                .list()
                .iter()
                .filter(|task| filter.matches(task))
                .cloned()
                .collect(),
            placeholder: store.placeholder().cloned(),
            counts: TaskCounts::of(store.list()),
        }
    }
}
