//! Orchestration layer for todo-mirror.
//!
//! Provides the sync service that reconciles the in-memory task store with a
//! remote collection, the seam trait that remote backends implement, and the
//! project configuration.

/// Project configuration loaded from `todo-mirror.toml`.
pub mod config;
/// User-facing operation errors.
pub mod error;
/// Per-task in-flight markers.
pub mod in_flight;
/// Remote collection seam and request payloads.
pub mod remote;
/// The sync service.
pub mod service;

pub use config::{ProjectConfig, RemoteConfig};
pub use error::SyncError;
pub use in_flight::InFlight;
pub use remote::{NewTask, RemoteStore, TaskPatch};
pub use service::TaskService;
