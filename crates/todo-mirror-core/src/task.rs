use serde::{Deserialize, Serialize};

use crate::id::{OwnerId, TaskId};

/// A persisted unit of work mirrored from the remote collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Identifier assigned by the remote side.
    pub id: TaskId,
    /// Human-readable title, stored trimmed.
    pub title: String,
    /// Completion flag.
    pub completed: bool,
    /// Owning account.
    #[serde(rename = "userId")]
    pub owner: OwnerId,
}

impl Task {
    /// Build the speculative placeholder shown while a create call is in
    /// flight. Carries the provisional sentinel id and an unset flag.
    #[must_use]
    pub fn provisional(title: impl Into<String>, owner: OwnerId) -> Self {
        Self {
            id: TaskId::PROVISIONAL,
            title: title.into(),
            completed: false,
            owner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_shape_uses_user_id() {
        let task = Task {
            id: TaskId(3),
            title: "Buy milk".into(),
            completed: false,
            owner: OwnerId(1353),
        };
        let json = serde_json::to_value(&task).expect("serialize task");
        assert_eq!(
            json,
            serde_json::json!({
                "id": 3,
                "title": "Buy milk",
                "completed": false,
                "userId": 1353,
            })
        );
        let back: Task = serde_json::from_value(json).expect("deserialize task");
        assert_eq!(back, task);
    }

    #[test]
    fn provisional_task_uses_sentinel() {
        let task = Task::provisional("Buy milk", OwnerId(1353));
        assert!(task.id.is_provisional());
        assert!(!task.completed);
        assert_eq!(task.title, "Buy milk");
    }
}
