//! Sign Up Use Case
//!
//! Registers a new identity. Sequencing matters: the email-uniqueness check
//! runs before hashing, and nothing is persisted on any failure path.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, person_name::PersonName};
use crate::error::{AccountError, AccountResult};

/// Sign up input
pub struct SignUpInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Sign up use case
pub struct SignUpUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> SignUpUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: SignUpInput) -> AccountResult<()> {
        let name = PersonName::new(input.name)
            .map_err(|e| AccountError::Validation(e.message().to_string()))?;
        let email = Email::new(input.email)
            .map_err(|e| AccountError::Validation(e.message().to_string()))?;
        let password = ClearTextPassword::new(input.password)
            .map_err(|e| AccountError::Validation(e.to_string()))?;

        // Uniqueness check before any expensive work
        if self.repo.exists_by_email(&email).await? {
            return Err(AccountError::EmailTaken);
        }

        let password_hash = password.hash()?;

        let user = User::new(name, email, password_hash);

        self.repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            email = %user.email,
            "User registered"
        );

        Ok(())
    }
}
