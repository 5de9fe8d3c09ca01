//! HTTP-backed implementation of the remote task collection.
//!
//! Speaks the collection's REST dialect: the task list lives at
//! `{base}/todos`, scoped by a `userId` query parameter, with per-item
//! `PATCH`/`DELETE` at `{base}/todos/{id}`.

mod error;

pub use error::HttpStoreError;

use reqwest::Client;
use tracing::debug;
use url::Url;

use todo_mirror_app::{NewTask, RemoteConfig, RemoteStore, TaskPatch};
use todo_mirror_core::{OwnerId, Task, TaskId};

/// Remote store speaking the collection's REST dialect.
///
/// One instance wraps one base URL; the underlying client holds a connection
/// pool and is reused across calls.
#[derive(Debug, Clone)]
pub struct HttpStore {
    client: Client,
    base: Url,
}

impl HttpStore {
    /// Store rooted at `base_url`.
    ///
    /// # Errors
    /// Returns [`HttpStoreError::BaseUrl`] when the URL cannot be parsed.
    pub fn new(base_url: &str) -> Result<Self, HttpStoreError> {
        let base = Url::parse(base_url)?;
        Ok(Self {
            client: Client::new(),
            base,
        })
    }

    /// Store configured from the project configuration.
    ///
    /// # Errors
    /// Returns [`HttpStoreError::BaseUrl`] when the configured URL cannot be
    /// parsed.
    pub fn from_config(config: &RemoteConfig) -> Result<Self, HttpStoreError> {
        Self::new(&config.base_url)
    }

    fn collection_endpoint(&self) -> String {
        format!("{}/todos", self.base.as_str().trim_end_matches('/'))
    }

    fn item_endpoint(&self, id: TaskId) -> String {
        format!("{}/{id}", self.collection_endpoint())
    }
}

impl RemoteStore for HttpStore {
    type Error = HttpStoreError;

    async fn fetch_all(&self, owner: OwnerId) -> Result<Vec<Task>, Self::Error> {
        debug!(%owner, "fetching remote collection");
        let tasks = self
            .client
            .get(self.collection_endpoint())
            .query(&[("userId", owner.0)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(tasks)
    }

    async fn create(&self, draft: &NewTask) -> Result<Task, Self::Error> {
        debug!(title = %draft.title, "creating remote task");
        let task = self
            .client
            .post(self.collection_endpoint())
            .json(draft)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(task)
    }

    async fn update(&self, id: TaskId, patch: &TaskPatch) -> Result<Task, Self::Error> {
        debug!(%id, "patching remote task");
        let task = self
            .client
            .patch(self.item_endpoint(id))
            .json(patch)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(task)
    }

    async fn delete(&self, id: TaskId) -> Result<(), Self::Error> {
        debug!(%id, "deleting remote task");
        self.client
            .delete(self.item_endpoint(id))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
