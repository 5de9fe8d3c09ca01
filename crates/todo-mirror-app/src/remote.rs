//! Seam to the remote task collection.

use serde::Serialize;

use todo_mirror_core::{OwnerId, Task, TaskId};

/// Draft payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTask {
    /// Trimmed title.
    pub title: String,
    /// Owner of the new task.
    #[serde(rename = "userId")]
    pub owner: OwnerId,
    /// Always `false` at creation time.
    pub completed: bool,
}

impl NewTask {
    /// Draft for the given owner.
    #[must_use]
    pub fn new(title: impl Into<String>, owner: OwnerId) -> Self {
        Self {
            title: title.into(),
            owner,
            completed: false,
        }
    }
}

/// Partial update sent to the remote collection.
///
/// Unset fields are omitted from the wire payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskPatch {
    /// New title, when renaming.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New completion flag, when toggling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Patch that only changes the completion flag.
    #[must_use]
    pub const fn completed(completed: bool) -> Self {
        Self {
            title: None,
            completed: Some(completed),
        }
    }

    /// Patch that only changes the title.
    #[must_use]
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            completed: None,
        }
    }
}

/// Remote CRUD collection the sync service reconciles against.
///
/// Implementations perform exactly one attempt per call; the service never
/// retries, so a failed attempt surfaces to the user once.
#[allow(async_fn_in_trait)]
pub trait RemoteStore: Send + Sync {
    /// Error type bubbled up from the backing transport.
    type Error: Into<anyhow::Error> + Send;

    /// Fetch every task owned by `owner`.
    ///
    /// # Errors
    /// Returns a transport-specific error when the fetch fails.
    async fn fetch_all(&self, owner: OwnerId) -> Result<Vec<Task>, Self::Error>;

    /// Create a task; the returned record carries the server-assigned id.
    ///
    /// # Errors
    /// Returns a transport-specific error when the create fails.
    async fn create(&self, draft: &NewTask) -> Result<Task, Self::Error>;

    /// Apply a partial update and return the full authoritative record.
    ///
    /// # Errors
    /// Returns a transport-specific error when the update fails.
    async fn update(&self, id: TaskId, patch: &TaskPatch) -> Result<Task, Self::Error>;

    /// Delete the task with the given id.
    ///
    /// # Errors
    /// Returns a transport-specific error when the delete fails.
    async fn delete(&self, id: TaskId) -> Result<(), Self::Error>;
}

impl<R> RemoteStore for &R
where
    R: RemoteStore + ?Sized,
{
    type Error = R::Error;

    async fn fetch_all(&self, owner: OwnerId) -> Result<Vec<Task>, Self::Error> {
        (**self).fetch_all(owner).await
    }

    async fn create(&self, draft: &NewTask) -> Result<Task, Self::Error> {
        (**self).create(draft).await
    }

    async fn update(&self, id: TaskId, patch: &TaskPatch) -> Result<Task, Self::Error> {
        (**self).update(id, patch).await
    }

    async fn delete(&self, id: TaskId) -> Result<(), Self::Error> {
        (**self).delete(id).await
    }
}

impl<R> RemoteStore for std::sync::Arc<R>
where
    R: RemoteStore,
{
    type Error = R::Error;

    async fn fetch_all(&self, owner: OwnerId) -> Result<Vec<Task>, Self::Error> {
        (**self).fetch_all(owner).await
    }

    async fn create(&self, draft: &NewTask) -> Result<Task, Self::Error> {
        (**self).create(draft).await
    }

    async fn update(&self, id: TaskId, patch: &TaskPatch) -> Result<Task, Self::Error> {
        (**self).update(id, patch).await
    }

    async fn delete(&self, id: TaskId) -> Result<(), Self::Error> {
        (**self).delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_payload_matches_remote_dialect() {
        let draft = NewTask::new("Buy milk", OwnerId(1353));
        let json = serde_json::to_value(&draft).expect("serialize draft");
        assert_eq!(
            json,
            serde_json::json!({
                "title": "Buy milk",
                "userId": 1353,
                "completed": false,
            })
        );
    }

    #[test]
    fn patch_omits_unset_fields() {
        let json = serde_json::to_value(TaskPatch::completed(true)).expect("serialize patch");
        assert_eq!(json, serde_json::json!({ "completed": true }));

        let json = serde_json::to_value(TaskPatch::title("Walk the dog")).expect("serialize patch");
        assert_eq!(json, serde_json::json!({ "title": "Walk the dog" }));
    }
}
