//! Account Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - User registration with name + email + password
//! - Sign-in issuing a stateless identity token (JWT)
//! - Sign-out by clearing the client-held credential
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, only the hash is stored
//! - Tokens are HS256 JWTs, self-contained, 24 hour expiry
//! - No server-side session state

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AccountConfig;
pub use error::{AccountError, AccountResult};
pub use infra::postgres::PgAccountRepository;
pub use presentation::router::account_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
