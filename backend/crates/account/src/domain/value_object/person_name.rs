//! Person Name Value Object
//!
//! Display name for a registered identity. NFKC-normalized before
//! validation; length is counted in code points.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// Minimum name length (in characters)
pub const PERSON_NAME_MIN_LENGTH: usize = 3;

/// Maximum name length (in characters)
pub const PERSON_NAME_MAX_LENGTH: usize = 100;

/// Person name value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonName(String);

impl PersonName {
    /// Create a new person name with validation
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let name: String = name.into().nfkc().collect::<String>().trim().to_string();

        let char_count = name.chars().count();

        if char_count < PERSON_NAME_MIN_LENGTH {
            return Err(AppError::bad_request(format!(
                "Name must be at least {} characters",
                PERSON_NAME_MIN_LENGTH
            )));
        }

        if char_count > PERSON_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Name must be at most {} characters",
                PERSON_NAME_MAX_LENGTH
            )));
        }

        if name.chars().any(char::is_control) {
            return Err(AppError::bad_request("Name contains invalid characters"));
        }

        Ok(Self(name))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
