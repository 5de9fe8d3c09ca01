//! Markers for tasks awaiting a remote response.

use std::collections::HashSet;

use todo_mirror_core::TaskId;

/// Set of task ids with an unresolved remote call.
///
/// Membership drives per-item busy indicators and guards single-item
/// operations against duplicate intents. An id is registered before its
/// remote call is issued and cleared when the call resolves, success or
/// failure.
#[derive(Debug, Default, Clone)]
pub struct InFlight {
    ids: HashSet<TaskId>,
}

impl InFlight {
    /// Register `id` unless a call for it is still unresolved.
    ///
    /// Returns `false` when the id is already pending, in which case the new
    /// intent must be dropped rather than queued.
    pub fn try_begin(&mut self, id: TaskId) -> bool {
        self.ids.insert(id)
    }

    /// Register a batch member. Batches do not reject duplicates.
    pub fn begin(&mut self, id: TaskId) {
        self.ids.insert(id);
    }

    /// Clear the marker once the remote call has resolved.
    pub fn finish(&mut self, id: TaskId) {
        self.ids.remove(&id);
    }

    /// Whether the task is awaiting a remote response.
    #[must_use]
    pub fn contains(&self, id: TaskId) -> bool {
        self.ids.contains(&id)
    }

    /// Snapshot of every pending id.
    #[must_use]
    pub fn ids(&self) -> Vec<TaskId> {
        self.ids.iter().copied().collect()
    }

    /// Whether nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_begin_is_rejected_until_finished() {
        let mut in_flight = InFlight::default();
        assert!(in_flight.try_begin(TaskId(1)));
        assert!(!in_flight.try_begin(TaskId(1)));
        assert!(in_flight.contains(TaskId(1)));
        in_flight.finish(TaskId(1));
        assert!(!in_flight.contains(TaskId(1)));
        assert!(in_flight.try_begin(TaskId(1)));
    }

    #[test]
    fn finish_is_unconditional() {
        let mut in_flight = InFlight::default();
        in_flight.finish(TaskId(7));
        assert!(in_flight.is_empty());
    }
}
