//! Update Task Use Case
//!
//! The write itself is owner-scoped; updating a task that belongs to
//! someone else matches zero rows and succeeds silently.

use std::sync::Arc;

use kernel::id::{TaskId, UserId};

use crate::domain::entity::task::TaskDraft;
use crate::domain::repository::TaskRepository;
use crate::domain::value_object::{TaskDescription, TaskTitle};
use crate::error::{TaskError, TaskResult};

/// Update task input
pub struct UpdateTaskInput {
    pub title: String,
    pub description: String,
}

/// Update task use case
pub struct UpdateTaskUseCase<R>
where
    R: TaskRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateTaskUseCase<R>
where
    R: TaskRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        owner_id: UserId,
        task_id: TaskId,
        input: UpdateTaskInput,
    ) -> TaskResult<()> {
        let draft = TaskDraft {
            title: TaskTitle::new(input.title)
                .map_err(|e| TaskError::Validation(e.message().to_string()))?,
            description: TaskDescription::new(input.description)
                .map_err(|e| TaskError::Validation(e.message().to_string()))?,
        };

        if !self.repo.owner_exists(&owner_id).await? {
            return Err(TaskError::OwnerNotFound);
        }

        if !self.repo.task_exists(&task_id).await? {
            return Err(TaskError::TaskNotFound);
        }

        self.repo.update_scoped(&owner_id, &task_id, &draft).await?;

        tracing::info!(task_id = %task_id, owner_id = %owner_id, "Task updated");

        Ok(())
    }
}
