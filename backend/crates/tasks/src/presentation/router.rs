//! Task Router
//!
//! All routes sit behind the identity middleware.

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use platform::token::TokenService;

use crate::domain::repository::TaskRepository;
use crate::infra::postgres::PgTaskRepository;
use crate::presentation::handlers::{self, TaskAppState};
use crate::presentation::middleware::{AuthMiddlewareState, require_identity};

/// Create the task router with PostgreSQL repository
pub fn task_router(repo: PgTaskRepository, tokens: Arc<TokenService>) -> Router {
    task_router_generic(repo, tokens)
}

/// Create a generic task router for any repository implementation
pub fn task_router_generic<R>(repo: R, tokens: Arc<TokenService>) -> Router
where
    R: TaskRepository + Clone + Send + Sync + 'static,
{
    let state = TaskAppState {
        repo: Arc::new(repo),
    };

    let auth_state = AuthMiddlewareState { tokens };

    Router::new()
        .route("/", post(handlers::create_task::<R>))
        .route("/", get(handlers::list_tasks::<R>))
        .route("/{id}", get(handlers::get_task::<R>))
        .route("/{id}", put(handlers::update_task::<R>))
        .route("/{id}", delete(handlers::delete_task::<R>))
        .layer(from_fn_with_state(auth_state, require_identity))
        .with_state(state)
}
