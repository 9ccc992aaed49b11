//! Auth Middleware
//!
//! Validates the identity token before any task route runs. The token comes
//! from the Authorization header (Bearer scheme) or, as a fallback, from an
//! `Authorization` cookie. On success the asserted identity is stored in
//! request extensions for handlers to read.

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use kernel::id::UserId;
use platform::token::{TokenService, strip_bearer};

/// Identity asserted by a validated token
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub email: String,
}

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState {
    pub tokens: Arc<TokenService>,
}

/// Middleware that requires a valid identity token
pub async fn require_identity(
    State(state): State<AuthMiddlewareState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let headers = req.headers();

    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(strip_bearer)
        .map(str::to_string)
        .or_else(|| platform::cookie::extract_cookie(headers, "Authorization"));

    let Some(token) = token else {
        return Err(unauthorized());
    };

    let identity = match state.tokens.validate(&token) {
        Ok(identity) => identity,
        Err(_) => {
            tracing::debug!("Rejected request with invalid identity token");
            return Err(unauthorized());
        }
    };

    req.extensions_mut().insert(AuthenticatedUser {
        user_id: identity.user_id,
        email: identity.email,
    });

    Ok(next.run(req).await)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [("X-Auth-Required", "true")],
    )
        .into_response()
}
