//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::email::Email;
use crate::error::AccountResult;

/// User repository trait
///
/// An absent user is `Ok(false)` / `Ok(None)`, never an error.
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Check if an email is already registered
    async fn exists_by_email(&self, email: &Email) -> AccountResult<bool>;

    /// Find user by email
    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<User>>;

    /// Create a new user
    async fn create(&self, user: &User) -> AccountResult<()>;
}
