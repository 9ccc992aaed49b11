//! HTTP Handlers
//!
//! All handlers run behind `require_identity`; the owner always comes from
//! the validated token in request extensions, never from the request body
//! or path.

use axum::Extension;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use kernel::id::TaskId;

use crate::application::{
    CreateTaskInput, CreateTaskUseCase, DeleteTaskUseCase, GetTaskUseCase, ListTasksUseCase,
    UpdateTaskInput, UpdateTaskUseCase,
};
use crate::domain::repository::TaskRepository;
use crate::error::{TaskError, TaskResult};
use crate::presentation::dto::{
    CreateTaskRequest, MessageResponse, TaskResponse, UpdateTaskRequest,
};
use crate::presentation::middleware::AuthenticatedUser;

/// Shared state for task handlers
#[derive(Clone)]
pub struct TaskAppState<R>
where
    R: TaskRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

fn parse_task_id(raw: &str) -> TaskResult<TaskId> {
    raw.parse()
        .map_err(|_| TaskError::Validation("Invalid task id".to_string()))
}

// ============================================================================
// Create
// ============================================================================

/// POST /tasks
pub async fn create_task<R>(
    State(state): State<TaskAppState<R>>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(req): Json<CreateTaskRequest>,
) -> TaskResult<impl IntoResponse>
where
    R: TaskRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateTaskUseCase::new(state.repo.clone());

    let task = use_case
        .execute(
            user.user_id,
            CreateTaskInput {
                title: req.title,
                description: req.description,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(TaskResponse::from(task))))
}

// ============================================================================
// List
// ============================================================================

/// GET /tasks
pub async fn list_tasks<R>(
    State(state): State<TaskAppState<R>>,
    Extension(user): Extension<AuthenticatedUser>,
) -> TaskResult<Json<Vec<TaskResponse>>>
where
    R: TaskRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListTasksUseCase::new(state.repo.clone());

    let tasks = use_case.execute(user.user_id).await?;

    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

// ============================================================================
// Get
// ============================================================================

/// GET /tasks/{id}
///
/// An ownership mismatch serializes as a `null` body with 200, matching the
/// silent-miss contract of the scoped fetch.
pub async fn get_task<R>(
    State(state): State<TaskAppState<R>>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> TaskResult<Json<Option<TaskResponse>>>
where
    R: TaskRepository + Clone + Send + Sync + 'static,
{
    let task_id = parse_task_id(&id)?;

    let use_case = GetTaskUseCase::new(state.repo.clone());

    let task = use_case.execute(user.user_id, task_id).await?;

    Ok(Json(task.map(TaskResponse::from)))
}

// ============================================================================
// Update
// ============================================================================

/// PUT /tasks/{id}
pub async fn update_task<R>(
    State(state): State<TaskAppState<R>>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    Json(req): Json<UpdateTaskRequest>,
) -> TaskResult<Json<MessageResponse>>
where
    R: TaskRepository + Clone + Send + Sync + 'static,
{
    let task_id = parse_task_id(&id)?;

    let use_case = UpdateTaskUseCase::new(state.repo.clone());

    use_case
        .execute(
            user.user_id,
            task_id,
            UpdateTaskInput {
                title: req.title,
                description: req.description,
            },
        )
        .await?;

    Ok(Json(MessageResponse {
        message: "Task updated".to_string(),
    }))
}

// ============================================================================
// Delete
// ============================================================================

/// DELETE /tasks/{id}
pub async fn delete_task<R>(
    State(state): State<TaskAppState<R>>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> TaskResult<StatusCode>
where
    R: TaskRepository + Clone + Send + Sync + 'static,
{
    let task_id = parse_task_id(&id)?;

    let use_case = DeleteTaskUseCase::new(state.repo.clone());

    use_case.execute(user.user_id, task_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
