//! Sign In Use Case
//!
//! Authenticates a user by email + password and issues an identity token.

use std::sync::Arc;

use platform::password::ClearTextPassword;
use platform::token::TokenService;

use crate::application::config::AccountConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AccountError, AccountResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
pub struct SignInOutput {
    /// Signed identity token for the client to hold
    pub token: String,
}

/// Sign in use case
pub struct SignInUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
    config: Arc<AccountConfig>,
}

impl<R> SignInUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>, config: Arc<AccountConfig>) -> Self {
        Self {
            repo,
            tokens,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AccountResult<SignInOutput> {
        let email =
            Email::new(input.email).map_err(|_| AccountError::UnknownEmail)?;
        let password = ClearTextPassword::new(input.password)
            .map_err(|_| AccountError::InvalidCredentials)?;

        if !self.repo.exists_by_email(&email).await? {
            return Err(AccountError::UnknownEmail);
        }

        // The existence check and the fetch can race with a deletion;
        // treat a vanished user as a credential failure
        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        if !user.password_hash.verify(&password) {
            return Err(AccountError::InvalidCredentials);
        }

        let token = self
            .tokens
            .issue(user.user_id, user.email.as_str(), self.config.token_ttl)
            .map_err(|_| AccountError::TokenIssuance)?;

        tracing::info!(user_id = %user.user_id, "User signed in");

        Ok(SignInOutput { token })
    }
}
