//! PostgreSQL Repository Implementations
//!
//! Every operation is a single statement; no transactions span rows.
//! Scoped statements filter by `owner_id AND task_id`.

use chrono::{DateTime, Utc};
use kernel::id::{TaskId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::task::{Task, TaskDraft};
use crate::domain::repository::TaskRepository;
use crate::domain::value_object::{TaskDescription, TaskTitle};
use crate::error::TaskResult;

/// PostgreSQL-backed task repository
#[derive(Clone)]
pub struct PgTaskRepository {
    pool: PgPool,
}

impl PgTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl TaskRepository for PgTaskRepository {
    async fn owner_exists(&self, owner_id: &UserId) -> TaskResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE user_id = $1)",
        )
        .bind(owner_id.as_uuid())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn task_exists(&self, task_id: &TaskId) -> TaskResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM tasks WHERE task_id = $1)",
        )
        .bind(task_id.as_uuid())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn insert(&self, task: &Task) -> TaskResult<()> {
        sqlx::query(
            r#"
            INSERT INTO tasks (
                task_id,
                owner_id,
                title,
                description,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(task.task_id.as_uuid())
        .bind(task.owner_id.as_uuid())
        .bind(task.title.as_str())
        .bind(task.description.as_str())
        .bind(task.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_for_owner(&self, owner_id: &UserId) -> TaskResult<Vec<Task>> {
        let rows = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT
                task_id,
                owner_id,
                title,
                description,
                created_at
            FROM tasks
            WHERE owner_id = $1
            "#,
        )
        .bind(owner_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TaskRow::into_task).collect())
    }

    async fn find_scoped(&self, owner_id: &UserId, task_id: &TaskId) -> TaskResult<Option<Task>> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT
                task_id,
                owner_id,
                title,
                description,
                created_at
            FROM tasks
            WHERE owner_id = $1 AND task_id = $2
            "#,
        )
        .bind(owner_id.as_uuid())
        .bind(task_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TaskRow::into_task))
    }

    async fn update_scoped(
        &self,
        owner_id: &UserId,
        task_id: &TaskId,
        draft: &TaskDraft,
    ) -> TaskResult<()> {
        // Zero rows affected is a valid outcome (ownership mismatch)
        sqlx::query(
            r#"
            UPDATE tasks SET
                title = $3,
                description = $4
            WHERE owner_id = $1 AND task_id = $2
            "#,
        )
        .bind(owner_id.as_uuid())
        .bind(task_id.as_uuid())
        .bind(draft.title.as_str())
        .bind(draft.description.as_str())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_scoped(&self, owner_id: &UserId, task_id: &TaskId) -> TaskResult<()> {
        sqlx::query("DELETE FROM tasks WHERE owner_id = $1 AND task_id = $2")
            .bind(owner_id.as_uuid())
            .bind(task_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct TaskRow {
    task_id: Uuid,
    owner_id: Uuid,
    title: String,
    description: String,
    created_at: DateTime<Utc>,
}

impl TaskRow {
    fn into_task(self) -> Task {
        Task {
            task_id: TaskId::from_uuid(self.task_id),
            owner_id: UserId::from_uuid(self.owner_id),
            title: TaskTitle::from_db(self.title),
            description: TaskDescription::from_db(self.description),
            created_at: self.created_at,
        }
    }
}
