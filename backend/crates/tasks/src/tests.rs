//! Use-case tests against an in-memory repository

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use kernel::id::{TaskId, UserId};

use crate::application::{
    CreateTaskInput, CreateTaskUseCase, DeleteTaskUseCase, GetTaskUseCase, ListTasksUseCase,
    UpdateTaskInput, UpdateTaskUseCase,
};
use crate::domain::entity::task::{Task, TaskDraft};
use crate::domain::repository::TaskRepository;
use crate::error::{TaskError, TaskResult};

/// In-memory task repository for tests
#[derive(Clone, Default)]
struct InMemoryTaskRepository {
    owners: Arc<Mutex<HashSet<UserId>>>,
    tasks: Arc<Mutex<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskRepository {
    fn with_owner(owner_id: UserId) -> Self {
        let repo = Self::default();
        repo.owners.lock().unwrap().insert(owner_id);
        repo
    }
}

impl TaskRepository for InMemoryTaskRepository {
    async fn owner_exists(&self, owner_id: &UserId) -> TaskResult<bool> {
        Ok(self.owners.lock().unwrap().contains(owner_id))
    }

    async fn task_exists(&self, task_id: &TaskId) -> TaskResult<bool> {
        Ok(self.tasks.lock().unwrap().contains_key(task_id))
    }

    async fn insert(&self, task: &Task) -> TaskResult<()> {
        self.tasks.lock().unwrap().insert(task.task_id, task.clone());
        Ok(())
    }

    async fn list_for_owner(&self, owner_id: &UserId) -> TaskResult<Vec<Task>> {
        Ok(self
            .tasks
            .lock()
            .unwrap()
            .values()
            .filter(|t| t.owner_id == *owner_id)
            .cloned()
            .collect())
    }

    async fn find_scoped(&self, owner_id: &UserId, task_id: &TaskId) -> TaskResult<Option<Task>> {
        Ok(self
            .tasks
            .lock()
            .unwrap()
            .get(task_id)
            .filter(|t| t.owner_id == *owner_id)
            .cloned())
    }

    async fn update_scoped(
        &self,
        owner_id: &UserId,
        task_id: &TaskId,
        draft: &TaskDraft,
    ) -> TaskResult<()> {
        if let Some(task) = self
            .tasks
            .lock()
            .unwrap()
            .get_mut(task_id)
            .filter(|t| t.owner_id == *owner_id)
        {
            task.apply(draft.clone());
        }
        Ok(())
    }

    async fn delete_scoped(&self, owner_id: &UserId, task_id: &TaskId) -> TaskResult<()> {
        let mut tasks = self.tasks.lock().unwrap();
        if tasks.get(task_id).is_some_and(|t| t.owner_id == *owner_id) {
            tasks.remove(task_id);
        }
        Ok(())
    }
}

fn input(title: &str, description: &str) -> CreateTaskInput {
    CreateTaskInput {
        title: title.to_string(),
        description: description.to_string(),
    }
}

async fn create(repo: &Arc<InMemoryTaskRepository>, owner: UserId, title: &str) -> Task {
    CreateTaskUseCase::new(repo.clone())
        .execute(owner, input(title, "some description"))
        .await
        .unwrap()
}

#[tokio::test]
async fn create_then_get_roundtrip() {
    let owner = UserId::new();
    let repo = Arc::new(InMemoryTaskRepository::with_owner(owner));

    let created = create(&repo, owner, "Buy groceries").await;

    let fetched = GetTaskUseCase::new(repo.clone())
        .execute(owner, created.task_id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(fetched.task_id, created.task_id);
    assert_eq!(fetched.title.as_str(), "Buy groceries");
    assert_eq!(fetched.description.as_str(), "some description");
}

#[tokio::test]
async fn create_rejects_unknown_owner() {
    let repo = Arc::new(InMemoryTaskRepository::default());

    let result = CreateTaskUseCase::new(repo.clone())
        .execute(UserId::new(), input("Title", "Description"))
        .await;

    assert!(matches!(result, Err(TaskError::OwnerNotFound)));
}

#[tokio::test]
async fn create_rejects_empty_title() {
    let owner = UserId::new();
    let repo = Arc::new(InMemoryTaskRepository::with_owner(owner));

    let result = CreateTaskUseCase::new(repo.clone())
        .execute(owner, input("", "Description"))
        .await;

    assert!(matches!(result, Err(TaskError::Validation(_))));
}

#[tokio::test]
async fn list_returns_only_own_tasks() {
    let alice = UserId::new();
    let bob = UserId::new();
    let repo = Arc::new(InMemoryTaskRepository::with_owner(alice));
    repo.owners.lock().unwrap().insert(bob);

    create(&repo, alice, "Alice task 1").await;
    create(&repo, alice, "Alice task 2").await;
    create(&repo, bob, "Bob task").await;

    let tasks = ListTasksUseCase::new(repo.clone())
        .execute(alice)
        .await
        .unwrap();

    assert_eq!(tasks.len(), 2);
    assert!(tasks.iter().all(|t| t.owner_id == alice));
}

#[tokio::test]
async fn list_empty_is_ok() {
    let owner = UserId::new();
    let repo = Arc::new(InMemoryTaskRepository::with_owner(owner));

    let tasks = ListTasksUseCase::new(repo.clone())
        .execute(owner)
        .await
        .unwrap();

    assert!(tasks.is_empty());
}

#[tokio::test]
async fn get_unknown_task_is_not_found() {
    let owner = UserId::new();
    let repo = Arc::new(InMemoryTaskRepository::with_owner(owner));

    let result = GetTaskUseCase::new(repo.clone())
        .execute(owner, TaskId::new())
        .await;

    assert!(matches!(result, Err(TaskError::TaskNotFound)));
}

#[tokio::test]
async fn get_other_owners_task_is_silent_none() {
    let alice = UserId::new();
    let bob = UserId::new();
    let repo = Arc::new(InMemoryTaskRepository::with_owner(alice));
    repo.owners.lock().unwrap().insert(bob);

    let bobs_task = create(&repo, bob, "Bob task").await;

    // The task exists, but it is not Alice's: no error, just nothing
    let result = GetTaskUseCase::new(repo.clone())
        .execute(alice, bobs_task.task_id)
        .await
        .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn update_changes_fields() {
    let owner = UserId::new();
    let repo = Arc::new(InMemoryTaskRepository::with_owner(owner));
    let task = create(&repo, owner, "Original").await;

    UpdateTaskUseCase::new(repo.clone())
        .execute(
            owner,
            task.task_id,
            UpdateTaskInput {
                title: "Renamed".to_string(),
                description: "New description".to_string(),
            },
        )
        .await
        .unwrap();

    let fetched = GetTaskUseCase::new(repo.clone())
        .execute(owner, task.task_id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(fetched.title.as_str(), "Renamed");
    assert_eq!(fetched.description.as_str(), "New description");
}

#[tokio::test]
async fn update_other_owners_task_is_silent_noop() {
    let alice = UserId::new();
    let bob = UserId::new();
    let repo = Arc::new(InMemoryTaskRepository::with_owner(alice));
    repo.owners.lock().unwrap().insert(bob);

    let bobs_task = create(&repo, bob, "Bob task").await;

    // Succeeds without touching Bob's row
    UpdateTaskUseCase::new(repo.clone())
        .execute(
            alice,
            bobs_task.task_id,
            UpdateTaskInput {
                title: "Hijacked".to_string(),
                description: "Should not land".to_string(),
            },
        )
        .await
        .unwrap();

    let untouched = GetTaskUseCase::new(repo.clone())
        .execute(bob, bobs_task.task_id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(untouched.title.as_str(), "Bob task");
}

#[tokio::test]
async fn update_unknown_task_is_not_found() {
    let owner = UserId::new();
    let repo = Arc::new(InMemoryTaskRepository::with_owner(owner));

    let result = UpdateTaskUseCase::new(repo.clone())
        .execute(
            owner,
            TaskId::new(),
            UpdateTaskInput {
                title: "Title".to_string(),
                description: "Description".to_string(),
            },
        )
        .await;

    assert!(matches!(result, Err(TaskError::TaskNotFound)));
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let owner = UserId::new();
    let repo = Arc::new(InMemoryTaskRepository::with_owner(owner));
    let task = create(&repo, owner, "Doomed").await;

    DeleteTaskUseCase::new(repo.clone())
        .execute(owner, task.task_id)
        .await
        .unwrap();

    let result = GetTaskUseCase::new(repo.clone())
        .execute(owner, task.task_id)
        .await;

    assert!(matches!(result, Err(TaskError::TaskNotFound)));
}

#[tokio::test]
async fn delete_other_owners_task_is_silent_noop() {
    let alice = UserId::new();
    let bob = UserId::new();
    let repo = Arc::new(InMemoryTaskRepository::with_owner(alice));
    repo.owners.lock().unwrap().insert(bob);

    let bobs_task = create(&repo, bob, "Bob task").await;

    DeleteTaskUseCase::new(repo.clone())
        .execute(alice, bobs_task.task_id)
        .await
        .unwrap();

    // Bob's task survives
    let survives = GetTaskUseCase::new(repo.clone())
        .execute(bob, bobs_task.task_id)
        .await
        .unwrap();

    assert!(survives.is_some());
}
