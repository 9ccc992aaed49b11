//! Account Router

use axum::{Router, routing::post};
use std::sync::Arc;

use platform::token::TokenService;

use crate::application::config::AccountConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgAccountRepository;
use crate::presentation::handlers::{self, AccountAppState};

/// Create the account router with PostgreSQL repository
pub fn account_router(
    repo: PgAccountRepository,
    tokens: Arc<TokenService>,
    config: AccountConfig,
) -> Router {
    account_router_generic(repo, tokens, config)
}

/// Create a generic account router for any repository implementation
pub fn account_router_generic<R>(
    repo: R,
    tokens: Arc<TokenService>,
    config: AccountConfig,
) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AccountAppState {
        repo: Arc::new(repo),
        tokens,
        config: Arc::new(config),
    };

    Router::new()
        .route("/signup", post(handlers::sign_up::<R>))
        .route("/signin", post(handlers::sign_in::<R>))
        .route("/signout", post(handlers::sign_out))
        .with_state(state)
}
