//! Task Value Objects
//!
//! Validated title and description. Both are required, length is counted
//! in code points after trimming.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum title length (in characters)
pub const TASK_TITLE_MAX_LENGTH: usize = 100;

/// Maximum description length (in characters)
pub const TASK_DESCRIPTION_MAX_LENGTH: usize = 1000;

/// Task title value object (1-100 characters)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Create a new title with validation
    pub fn new(title: impl Into<String>) -> AppResult<Self> {
        let title = title.into().trim().to_string();

        if title.is_empty() {
            return Err(AppError::bad_request("Title cannot be empty"));
        }

        if title.chars().count() > TASK_TITLE_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Title must be at most {} characters",
                TASK_TITLE_MAX_LENGTH
            )));
        }

        Ok(Self(title))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    /// Get the title as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Task description value object (1-1000 characters)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDescription(String);

impl TaskDescription {
    /// Create a new description with validation
    pub fn new(description: impl Into<String>) -> AppResult<Self> {
        let description = description.into().trim().to_string();

        if description.is_empty() {
            return Err(AppError::bad_request("Description cannot be empty"));
        }

        if description.chars().count() > TASK_DESCRIPTION_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Description must be at most {} characters",
                TASK_DESCRIPTION_MAX_LENGTH
            )));
        }

        Ok(Self(description))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(description: impl Into<String>) -> Self {
        Self(description.into())
    }

    /// Get the description as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_valid() {
        assert!(TaskTitle::new("Buy groceries").is_ok());
        assert!(TaskTitle::new("a").is_ok());
        assert!(TaskTitle::new("a".repeat(TASK_TITLE_MAX_LENGTH)).is_ok());
    }

    #[test]
    fn test_title_invalid() {
        assert!(TaskTitle::new("").is_err());
        assert!(TaskTitle::new("   ").is_err());
        assert!(TaskTitle::new("a".repeat(TASK_TITLE_MAX_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_description_valid() {
        assert!(TaskDescription::new("Milk, eggs, bread").is_ok());
        assert!(TaskDescription::new("a".repeat(TASK_DESCRIPTION_MAX_LENGTH)).is_ok());
    }

    #[test]
    fn test_description_invalid() {
        assert!(TaskDescription::new("").is_err());
        assert!(TaskDescription::new("a".repeat(TASK_DESCRIPTION_MAX_LENGTH + 1)).is_err());
    }
}
