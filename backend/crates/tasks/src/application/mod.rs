//! Application Layer
//!
//! One use case per file. Every use case verifies the owner still exists
//! before touching tasks; a token can outlive its account.

pub mod create_task;
pub mod delete_task;
pub mod get_task;
pub mod list_tasks;
pub mod update_task;

// Re-exports
pub use create_task::{CreateTaskInput, CreateTaskUseCase};
pub use delete_task::DeleteTaskUseCase;
pub use get_task::GetTaskUseCase;
pub use list_tasks::ListTasksUseCase;
pub use update_task::{UpdateTaskInput, UpdateTaskUseCase};
