//! List Tasks Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::task::Task;
use crate::domain::repository::TaskRepository;
use crate::error::{TaskError, TaskResult};

/// List tasks use case
pub struct ListTasksUseCase<R>
where
    R: TaskRepository,
{
    repo: Arc<R>,
}

impl<R> ListTasksUseCase<R>
where
    R: TaskRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, owner_id: UserId) -> TaskResult<Vec<Task>> {
        if !self.repo.owner_exists(&owner_id).await? {
            return Err(TaskError::OwnerNotFound);
        }

        // Store order; an empty list is a normal outcome
        self.repo.list_for_owner(&owner_id).await
    }
}
