//! Sync service reconciling the in-memory store with the remote collection.

use std::sync::{Mutex, MutexGuard, PoisonError};

use futures::future::join_all;
use tracing::{debug, warn};

use todo_mirror_core::{
    ErrorBanner, FilterMode, OwnerId, Projection, Task, TaskCounts, TaskId, TaskStore,
};

use crate::error::SyncError;
use crate::in_flight::InFlight;
use crate::remote::{NewTask, RemoteStore, TaskPatch};

/// Optimistic sync service over a remote task collection.
///
/// Every operation runs to a well-defined end state: on success the store
/// reflects the authoritative remote record, on failure the store is left as
/// it was (the speculative placeholder excepted, which is always rolled back)
/// and exactly one message lands on the error banner. The returned
/// [`SyncError`] mirrors that message, so callers driving a render loop may
/// ignore it and read the banner instead.
///
/// Mutable state sits behind one internal mutex that is only ever held
/// synchronously, never across an await point. Operations therefore take
/// `&self` and may be driven concurrently from a single shared handle; the
/// in-flight set is what serializes intents per task id.
pub struct TaskService<R> {
    remote: R,
    owner: OwnerId,
    state: Mutex<SharedState>,
}

#[derive(Debug, Default)]
struct SharedState {
    store: TaskStore,
    in_flight: InFlight,
    banner: ErrorBanner,
}

impl<R> TaskService<R> {
    /// Service over `remote`, mirroring the collection of `owner`.
    pub fn new(remote: R, owner: OwnerId) -> Self {
        Self {
            remote,
            owner,
            state: Mutex::new(SharedState::default()),
        }
    }

    /// Owner whose collection is mirrored.
    #[must_use]
    pub const fn owner(&self) -> OwnerId {
        self.owner
    }

    /// Expose a reference to the underlying remote store.
    pub const fn remote(&self) -> &R {
        &self.remote
    }

    fn state(&self) -> MutexGuard<'_, SharedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Projection of the current store through `filter`.
    #[must_use]
    pub fn view(&self, filter: FilterMode) -> Projection {
        Projection::of(&self.state().store, filter)
    }

    /// Whether `id` has an unresolved remote call.
    #[must_use]
    pub fn is_busy(&self, id: TaskId) -> bool {
        self.state().in_flight.contains(id)
    }

    /// Ids with unresolved remote calls.
    #[must_use]
    pub fn busy_ids(&self) -> Vec<TaskId> {
        self.state().in_flight.ids()
    }

    /// The live banner message, if any.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.state().banner.message().map(str::to_owned)
    }

    /// Dismiss the banner message.
    pub fn dismiss_error(&self) {
        self.state().banner.clear();
    }
}

impl<R: RemoteStore> TaskService<R> {
    /// Seed the store from the remote collection.
    ///
    /// # Errors
    /// [`SyncError::LoadFailed`] when the fetch fails; the store stays
    /// empty.
    pub async fn load(&self) -> Result<(), SyncError> {
        match self.remote.fetch_all(self.owner).await {
            Ok(tasks) => {
                debug!(count = tasks.len(), "loaded remote collection");
                self.state().store.replace_all(tasks);
                Ok(())
            }
            Err(err) => Err(Self::fail(&mut self.state(), err, SyncError::LoadFailed)),
        }
    }

    /// Create a task from `title`.
    ///
    /// The speculative placeholder is visible for the duration of the remote
    /// call and cleared unconditionally when it resolves. The server-assigned
    /// id is authoritative.
    ///
    /// # Errors
    /// [`SyncError::EmptyTitle`] when the trimmed title is empty; no remote
    /// call is made. [`SyncError::AddFailed`] when the create call fails; the
    /// store is left unchanged.
    pub async fn add(&self, title: &str) -> Result<TaskId, SyncError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            self.state().banner.set(SyncError::EmptyTitle.to_string());
            return Err(SyncError::EmptyTitle);
        }

        self.state()
            .store
            .set_placeholder(Some(Task::provisional(trimmed, self.owner)));

        let draft = NewTask::new(trimmed, self.owner);
        let result = self.remote.create(&draft).await;

        let mut state = self.state();
        state.store.set_placeholder(None);
        match result {
            Ok(task) => {
                let id = task.id;
                state.store.insert(task);
                Ok(id)
            }
            Err(err) => Err(Self::fail(&mut state, err, SyncError::AddFailed)),
        }
    }

    /// Flip the completion flag of `id`.
    ///
    /// A toggle for an unknown id, or for an id already awaiting a remote
    /// response, is dropped rather than queued.
    ///
    /// # Errors
    /// [`SyncError::UpdateFailed`] when the update call fails; the flag is
    /// left unchanged.
    pub async fn toggle(&self, id: TaskId) -> Result<(), SyncError> {
        let desired = {
            let mut state = self.state();
            let Some(task) = state.store.get(id) else {
                return Ok(());
            };
            let desired = !task.completed;
            if !state.in_flight.try_begin(id) {
                debug!(%id, "toggle dropped, already in flight");
                return Ok(());
            }
            desired
        };

        let result = self.remote.update(id, &TaskPatch::completed(desired)).await;

        let mut state = self.state();
        state.in_flight.finish(id);
        match result {
            Ok(task) => {
                state.store.replace(id, task);
                Ok(())
            }
            Err(err) => Err(Self::fail(&mut state, err, SyncError::UpdateFailed)),
        }
    }

    /// Rename `id` to `new_title`.
    ///
    /// Renaming to the current title is a no-op with no remote call.
    /// Renaming to a title that trims to empty deletes the task instead.
    /// Duplicate intents for an id already in flight are dropped.
    ///
    /// # Errors
    /// [`SyncError::UpdateFailed`] when the update call fails; the title is
    /// left unchanged. [`SyncError::DeleteFailed`] when the empty-title
    /// alias fails to delete.
    pub async fn rename(&self, id: TaskId, new_title: &str) -> Result<(), SyncError> {
        let trimmed = new_title.trim();

        {
            let mut state = self.state();
            let Some(task) = state.store.get(id) else {
                return Ok(());
            };
            if task.title == trimmed {
                return Ok(());
            }
            if !trimmed.is_empty() && !state.in_flight.try_begin(id) {
                debug!(%id, "rename dropped, already in flight");
                return Ok(());
            }
        }

        if trimmed.is_empty() {
            // An emptied title is an alias for deletion.
            return self.delete(id).await;
        }

        let result = self.remote.update(id, &TaskPatch::title(trimmed)).await;

        let mut state = self.state();
        state.in_flight.finish(id);
        match result {
            Ok(task) => {
                state.store.replace(id, task);
                Ok(())
            }
            Err(err) => Err(Self::fail(&mut state, err, SyncError::UpdateFailed)),
        }
    }

    /// Delete `id`.
    ///
    /// A delete for an unknown id, or for an id already awaiting a remote
    /// response, is dropped.
    ///
    /// # Errors
    /// [`SyncError::DeleteFailed`] when the delete call fails; the task
    /// stays in the store.
    pub async fn delete(&self, id: TaskId) -> Result<(), SyncError> {
        {
            let mut state = self.state();
            if state.store.get(id).is_none() {
                return Ok(());
            }
            if !state.in_flight.try_begin(id) {
                debug!(%id, "delete dropped, already in flight");
                return Ok(());
            }
        }

        let result = self.remote.delete(id).await;

        let mut state = self.state();
        state.in_flight.finish(id);
        match result {
            Ok(()) => {
                state.store.remove(id);
                Ok(())
            }
            Err(err) => Err(Self::fail(&mut state, err, SyncError::DeleteFailed)),
        }
    }

    /// Drive every task toward the same completion state.
    ///
    /// The target is the negation of "all completed". Only tasks whose flag
    /// differs from the target are updated, concurrently; the call returns
    /// once every constituent update has resolved. Each success replaces
    /// that task with the authoritative record; failed tasks keep their
    /// previous flag.
    ///
    /// # Errors
    /// [`SyncError::BulkUpdateFailed`] when at least one constituent update
    /// fails. The banner carries the message once per batch.
    pub async fn toggle_all(&self) -> Result<(), SyncError> {
        let (ids, desired) = {
            let mut state = self.state();
            let desired = !TaskCounts::of(state.store.list()).all_completed();
            let ids: Vec<TaskId> = state
                .store
                .list()
                .iter()
                .filter(|task| task.completed != desired)
                .map(|task| task.id)
                .collect();
            for &id in &ids {
                state.in_flight.begin(id);
            }
            (ids, desired)
        };

        let patch = TaskPatch::completed(desired);
        let patch = &patch;
        let results = join_all(
            ids.iter()
                .map(|&id| async move { (id, self.remote.update(id, patch).await) }),
        )
        .await;

        let mut state = self.state();
        let mut outcome = Ok(());
        for (id, result) in results {
            state.in_flight.finish(id);
            match result {
                Ok(task) => state.store.replace(id, task),
                Err(err) => {
                    outcome = Err(Self::fail(&mut state, err, SyncError::BulkUpdateFailed));
                }
            }
        }
        outcome
    }

    /// Delete every completed task.
    ///
    /// Deletes are issued concurrently; the call returns once every
    /// constituent delete has resolved, whatever the individual outcomes.
    /// Each success removes that task; failed tasks stay in the store.
    ///
    /// # Errors
    /// [`SyncError::DeleteFailed`] when at least one constituent delete
    /// fails. The banner carries the message once per batch.
    pub async fn clear_completed(&self) -> Result<(), SyncError> {
        let ids = {
            let mut state = self.state();
            let ids: Vec<TaskId> = state
                .store
                .list()
                .iter()
                .filter(|task| task.completed)
                .map(|task| task.id)
                .collect();
            for &id in &ids {
                state.in_flight.begin(id);
            }
            ids
        };

        let results = join_all(
            ids.iter()
                .map(|&id| async move { (id, self.remote.delete(id).await) }),
        )
        .await;

        let mut state = self.state();
        let mut outcome = Ok(());
        for (id, result) in results {
            state.in_flight.finish(id);
            match result {
                Ok(()) => state.store.remove(id),
                Err(err) => {
                    outcome = Err(Self::fail(&mut state, err, SyncError::DeleteFailed));
                }
            }
        }
        outcome
    }

    fn fail(state: &mut SharedState, err: R::Error, outcome: SyncError) -> SyncError {
        let err: anyhow::Error = err.into();
        warn!(error = %err, outcome = %outcome, "remote call failed");
        state.banner.set(outcome.to_string());
        outcome
    }
}
