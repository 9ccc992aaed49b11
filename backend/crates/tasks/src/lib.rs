//! Tasks Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, auth middleware
//!
//! ## Ownership Model
//! Every task belongs to exactly one owner. All reads and writes are
//! filtered by `owner_id` in the repository; the filter is the sole
//! ownership enforcement. An operation against another owner's task is
//! a silent no-op (or empty result), never an authorization error.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use error::{TaskError, TaskResult};
pub use infra::postgres::PgTaskRepository;
pub use presentation::middleware::AuthenticatedUser;
pub use presentation::router::task_router;
