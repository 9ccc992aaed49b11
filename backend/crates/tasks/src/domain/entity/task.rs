//! Task Entity
//!
//! A task belongs to exactly one owner. The ID and creation timestamp are
//! assigned server-side; the owner comes from the validated identity token,
//! never from client input.

use chrono::{DateTime, Utc};
use kernel::id::{TaskId, UserId};

use crate::domain::value_object::{TaskDescription, TaskTitle};

/// Validated mutable fields of a task, used for create and update
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub title: TaskTitle,
    pub description: TaskDescription,
}

/// Task entity
#[derive(Debug, Clone)]
pub struct Task {
    /// Internal UUID identifier (server-assigned)
    pub task_id: TaskId,
    /// Owning user (plain reference, no foreign key constraint)
    pub owner_id: UserId,
    /// Title (1-100 characters)
    pub title: TaskTitle,
    /// Description (1-1000 characters)
    pub description: TaskDescription,
    /// Created timestamp, set once at construction
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a new task from a validated draft
    pub fn new(owner_id: UserId, draft: TaskDraft) -> Self {
        Self {
            task_id: TaskId::new(),
            owner_id,
            title: draft.title,
            description: draft.description,
            created_at: Utc::now(),
        }
    }

    /// Apply a draft to an existing task, keeping identity and timestamp
    pub fn apply(&mut self, draft: TaskDraft) {
        self.title = draft.title;
        self.description = draft.description;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> TaskDraft {
        TaskDraft {
            title: TaskTitle::new("Buy groceries").unwrap(),
            description: TaskDescription::new("Milk, eggs, bread").unwrap(),
        }
    }

    #[test]
    fn test_new_task_gets_fresh_id() {
        let owner = UserId::new();
        let a = Task::new(owner, draft());
        let b = Task::new(owner, draft());
        assert_ne!(a.task_id, b.task_id);
        assert_eq!(a.owner_id, b.owner_id);
    }

    #[test]
    fn test_apply_keeps_identity() {
        let mut task = Task::new(UserId::new(), draft());
        let original_id = task.task_id;
        let original_created = task.created_at;

        task.apply(TaskDraft {
            title: TaskTitle::new("Renamed").unwrap(),
            description: TaskDescription::new("Updated").unwrap(),
        });

        assert_eq!(task.task_id, original_id);
        assert_eq!(task.created_at, original_created);
        assert_eq!(task.title.as_str(), "Renamed");
    }
}
