//! Task Error Types
//!
//! Task-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Task-specific result type alias
pub type TaskResult<T> = Result<T, TaskError>;

/// Task-specific error variants
#[derive(Debug, Error)]
pub enum TaskError {
    /// Request input failed validation
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The owner referenced by the token no longer exists
    #[error("User not found")]
    OwnerNotFound,

    /// Task does not exist
    #[error("Task not found")]
    TaskNotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TaskError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            TaskError::Validation(_) => StatusCode::BAD_REQUEST,
            TaskError::OwnerNotFound | TaskError::TaskNotFound => StatusCode::NOT_FOUND,
            TaskError::Database(_) | TaskError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TaskError::Validation(_) => ErrorKind::BadRequest,
            TaskError::OwnerNotFound | TaskError::TaskNotFound => ErrorKind::NotFound,
            TaskError::Database(_) | TaskError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Infrastructure variants get a generic client-facing message; the
    /// underlying detail stays in the logs.
    pub fn to_app_error(&self) -> AppError {
        match self {
            TaskError::Database(_) | TaskError::Internal(_) => {
                AppError::new(self.kind(), "An internal error occurred")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            TaskError::Database(e) => {
                tracing::error!(error = %e, "Task database error");
            }
            TaskError::Internal(msg) => {
                tracing::error!(message = %msg, "Task internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Task error");
            }
        }
    }
}

impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for TaskError {
    fn from(err: AppError) -> Self {
        TaskError::Internal(err.to_string())
    }
}
