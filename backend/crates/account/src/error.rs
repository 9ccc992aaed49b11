//! Account Error Types
//!
//! This module provides account-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! Sign-in failures deliberately keep their distinct messages (unknown email
//! vs wrong password); both live here so the wording can be unified in one
//! place without touching use-case control flow.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Account-specific result type alias
pub type AccountResult<T> = Result<T, AccountError>;

/// Account-specific error variants
#[derive(Debug, Error)]
pub enum AccountError {
    /// Request input failed validation
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Email is already registered
    #[error("Email is already registered")]
    EmailTaken,

    /// No account exists for the given email
    #[error("No account found for this email")]
    UnknownEmail,

    /// Password does not match the stored hash
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Password hashing failed
    #[error("Password hashing failed")]
    Hashing(String),

    /// Token could not be issued
    #[error("Failed to issue identity token")]
    TokenIssuance,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AccountError::Validation(_) => StatusCode::BAD_REQUEST,
            AccountError::EmailTaken => StatusCode::CONFLICT,
            AccountError::UnknownEmail | AccountError::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            AccountError::Hashing(_)
            | AccountError::TokenIssuance
            | AccountError::Database(_)
            | AccountError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::Validation(_) => ErrorKind::BadRequest,
            AccountError::EmailTaken => ErrorKind::Conflict,
            AccountError::UnknownEmail | AccountError::InvalidCredentials => {
                ErrorKind::Unauthorized
            }
            AccountError::Hashing(_)
            | AccountError::TokenIssuance
            | AccountError::Database(_)
            | AccountError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Infrastructure variants get a generic client-facing message; the
    /// underlying detail stays in the logs.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AccountError::Hashing(_) | AccountError::Database(_) | AccountError::Internal(_) => {
                AppError::new(self.kind(), "An internal error occurred")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AccountError::Database(e) => {
                tracing::error!(error = %e, "Account database error");
            }
            AccountError::Hashing(msg) => {
                tracing::error!(message = %msg, "Password hashing error");
            }
            AccountError::TokenIssuance => {
                tracing::error!("Token issuance failed");
            }
            AccountError::Internal(msg) => {
                tracing::error!(message = %msg, "Account internal error");
            }
            AccountError::UnknownEmail | AccountError::InvalidCredentials => {
                tracing::warn!("Failed sign-in attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Account error");
            }
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AccountError {
    fn from(err: AppError) -> Self {
        AccountError::Internal(err.to_string())
    }
}

impl From<platform::password::PasswordHashError> for AccountError {
    fn from(err: platform::password::PasswordHashError) -> Self {
        AccountError::Hashing(err.to_string())
    }
}
