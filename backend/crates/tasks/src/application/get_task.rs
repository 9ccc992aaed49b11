//! Get Task Use Case
//!
//! The task-existence check is independent of ownership: a missing task is
//! `TaskNotFound`, while a task owned by someone else yields `Ok(None)`.

use std::sync::Arc;

use kernel::id::{TaskId, UserId};

use crate::domain::entity::task::Task;
use crate::domain::repository::TaskRepository;
use crate::error::{TaskError, TaskResult};

/// Get task use case
pub struct GetTaskUseCase<R>
where
    R: TaskRepository,
{
    repo: Arc<R>,
}

impl<R> GetTaskUseCase<R>
where
    R: TaskRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, owner_id: UserId, task_id: TaskId) -> TaskResult<Option<Task>> {
        if !self.repo.owner_exists(&owner_id).await? {
            return Err(TaskError::OwnerNotFound);
        }

        if !self.repo.task_exists(&task_id).await? {
            return Err(TaskError::TaskNotFound);
        }

        self.repo.find_scoped(&owner_id, &task_id).await
    }
}
