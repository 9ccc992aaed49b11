//! User Entity
//!
//! A registered identity. Identifiers and timestamps are assigned
//! server-side at construction, never taken from client input.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::HashedPassword;

use crate::domain::value_object::{email::Email, person_name::PersonName};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Display name
    pub name: PersonName,
    /// Email address (unique, used for sign-in)
    pub email: Email,
    /// Argon2id password hash (PHC string)
    pub password_hash: HashedPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh ID and timestamp
    pub fn new(name: PersonName, email: Email, password_hash: HashedPassword) -> Self {
        Self {
            user_id: UserId::new(),
            name,
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::ClearTextPassword;

    #[test]
    fn test_new_user_gets_fresh_id() {
        let hash = ClearTextPassword::new("password123".to_string())
            .unwrap()
            .hash()
            .unwrap();

        let a = User::new(
            PersonName::new("Alice").unwrap(),
            Email::new("alice@example.com").unwrap(),
            hash.clone(),
        );
        let b = User::new(
            PersonName::new("Alice").unwrap(),
            Email::new("alice2@example.com").unwrap(),
            hash,
        );

        assert_ne!(a.user_id, b.user_id);
    }
}
