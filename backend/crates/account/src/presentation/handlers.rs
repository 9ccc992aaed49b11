//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use platform::token::TokenService;

use crate::application::config::AccountConfig;
use crate::application::{SignInInput, SignInUseCase, SignUpInput, SignUpUseCase};
use crate::domain::repository::UserRepository;
use crate::error::AccountResult;
use crate::presentation::dto::{SignInRequest, SignInResponse, SignUpRequest, SignUpResponse};

/// Shared state for account handlers
#[derive(Clone)]
pub struct AccountAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenService>,
    pub config: Arc<AccountConfig>,
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /user/signup
pub async fn sign_up<R>(
    State(state): State<AccountAppState<R>>,
    Json(req): Json<SignUpRequest>,
) -> AccountResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone());

    let input = SignUpInput {
        name: req.name,
        email: req.email,
        password: req.password,
    };

    use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(SignUpResponse {
            message: "Account created".to_string(),
        }),
    ))
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /user/signin
pub async fn sign_in<R>(
    State(state): State<AccountAppState<R>>,
    Json(req): Json<SignInRequest>,
) -> AccountResult<Json<SignInResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(
        state.repo.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );

    let input = SignInInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(SignInResponse {
        token: output.token,
    }))
}

// ============================================================================
// Sign Out
// ============================================================================

/// POST /user/signout
///
/// Tokens are stateless, so signing out is purely a client-side concern:
/// clear the Authorization cookie and return no content.
pub async fn sign_out() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [(header::SET_COOKIE, build_clear_cookie())],
    )
}

// ============================================================================
// Helper Functions
// ============================================================================

fn build_clear_cookie() -> String {
    [
        "Authorization=",
        "HttpOnly",
        "Path=/",
        "Max-Age=0",
        "Expires=Thu, 01 Jan 1970 00:00:00 GMT",
        "SameSite=Lax",
    ]
    .join("; ")
}
