//! Create Task Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::task::{Task, TaskDraft};
use crate::domain::repository::TaskRepository;
use crate::domain::value_object::{TaskDescription, TaskTitle};
use crate::error::{TaskError, TaskResult};

/// Create task input
pub struct CreateTaskInput {
    pub title: String,
    pub description: String,
}

/// Create task use case
pub struct CreateTaskUseCase<R>
where
    R: TaskRepository,
{
    repo: Arc<R>,
}

impl<R> CreateTaskUseCase<R>
where
    R: TaskRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, owner_id: UserId, input: CreateTaskInput) -> TaskResult<Task> {
        let draft = TaskDraft {
            title: TaskTitle::new(input.title)
                .map_err(|e| TaskError::Validation(e.message().to_string()))?,
            description: TaskDescription::new(input.description)
                .map_err(|e| TaskError::Validation(e.message().to_string()))?,
        };

        if !self.repo.owner_exists(&owner_id).await? {
            return Err(TaskError::OwnerNotFound);
        }

        let task = Task::new(owner_id, draft);

        self.repo.insert(&task).await?;

        tracing::info!(
            task_id = %task.task_id,
            owner_id = %task.owner_id,
            "Task created"
        );

        Ok(task)
    }
}
