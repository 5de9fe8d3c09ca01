//! Domain types and pure client-side state for todo-mirror.
//!
//! This crate holds everything that can be reasoned about without a remote
//! side: the task record and its identifiers, the in-memory store mirroring
//! the persisted collection, filtered view projections, and the one-slot
//! error banner. All mutation ordering is the sync service's responsibility;
//! nothing in here blocks, locks, or performs I/O.

/// One-slot transient user-facing error message.
pub mod banner;
/// Identifier types.
pub mod id;
/// Persisted collection plus the speculative placeholder slot.
pub mod store;
/// Task record definition.
pub mod task;
/// Filtered views and aggregate counters.
pub mod view;

pub use banner::ErrorBanner;
pub use id::{OwnerId, TaskId};
pub use store::TaskStore;
pub use task::Task;
pub use view::{FilterMode, Projection, TaskCounts};
