//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//!
//! All scoped operations filter by owner AND task id; the filter is the only
//! ownership enforcement in the system. A scoped operation matching zero rows
//! is not an error.

use kernel::id::{TaskId, UserId};

use crate::domain::entity::task::{Task, TaskDraft};
use crate::error::TaskResult;

/// Task repository trait
#[trait_variant::make(TaskRepository: Send)]
pub trait LocalTaskRepository {
    /// Check if the owner (user) still exists
    async fn owner_exists(&self, owner_id: &UserId) -> TaskResult<bool>;

    /// Check if a task exists, regardless of owner
    async fn task_exists(&self, task_id: &TaskId) -> TaskResult<bool>;

    /// Insert a new task
    async fn insert(&self, task: &Task) -> TaskResult<()>;

    /// List all tasks belonging to the owner, in store order
    async fn list_for_owner(&self, owner_id: &UserId) -> TaskResult<Vec<Task>>;

    /// Fetch one task scoped to the owner; `None` when no row matches both
    async fn find_scoped(&self, owner_id: &UserId, task_id: &TaskId) -> TaskResult<Option<Task>>;

    /// Update title/description of the task scoped to the owner
    async fn update_scoped(
        &self,
        owner_id: &UserId,
        task_id: &TaskId,
        draft: &TaskDraft,
    ) -> TaskResult<()>;

    /// Delete the task scoped to the owner
    async fn delete_scoped(&self, owner_id: &UserId, task_id: &TaskId) -> TaskResult<()>;
}
