//! Delete Task Use Case
//!
//! The delete is owner-scoped; deleting a task that belongs to someone
//! else matches zero rows and succeeds silently.

use std::sync::Arc;

use kernel::id::{TaskId, UserId};

use crate::domain::repository::TaskRepository;
use crate::error::{TaskError, TaskResult};

/// Delete task use case
pub struct DeleteTaskUseCase<R>
where
    R: TaskRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteTaskUseCase<R>
where
    R: TaskRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, owner_id: UserId, task_id: TaskId) -> TaskResult<()> {
        if !self.repo.owner_exists(&owner_id).await? {
            return Err(TaskError::OwnerNotFound);
        }

        if !self.repo.task_exists(&task_id).await? {
            return Err(TaskError::TaskNotFound);
        }

        self.repo.delete_scoped(&owner_id, &task_id).await?;

        tracing::info!(task_id = %task_id, owner_id = %owner_id, "Task deleted");

        Ok(())
    }
}
