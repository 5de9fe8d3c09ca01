//! Errors surfaced to the user by sync operations.

use thiserror::Error;

/// Outcome of a failed sync operation.
///
/// The `Display` text is exactly the message the service places on the error
/// banner; remote error details never reach the user.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SyncError {
    /// A new task title was empty after trimming; nothing was sent.
    #[error("Title should not be empty")]
    EmptyTitle,
    /// The initial fetch of the collection failed.
    #[error("Unable to load todos")]
    LoadFailed,
    /// The remote side rejected or dropped a create call.
    #[error("Unable to add a todo")]
    AddFailed,
    /// The remote side rejected or dropped a single-item update.
    #[error("Unable to update a todo")]
    UpdateFailed,
    /// The remote side rejected or dropped a delete.
    #[error("Unable to delete a todo")]
    DeleteFailed,
    /// At least one update in a bulk toggle failed.
    #[error("Unable to update todos")]
    BulkUpdateFailed,
}
