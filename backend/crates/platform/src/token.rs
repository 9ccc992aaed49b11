//! Identity Tokens
//!
//! Signed, time-bounded identity tokens (JWT, HS256). A token carries the
//! holder's user ID and email and is self-contained: validation needs only
//! the signing secret, never a server-side session store.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use kernel::id::UserId;

/// Token operation errors
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signing the token failed
    #[error("Failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    /// Token is missing, malformed, expired, or carries a bad signature
    #[error("Invalid or expired token")]
    Invalid,
}

/// JWT claims carried by an identity token
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the holder's user ID (UUID string)
    pub sub: String,
    /// The holder's email address
    pub email: String,
    /// Issued-at (Unix seconds)
    pub iat: i64,
    /// Expiry (Unix seconds)
    pub exp: i64,
}

/// Identity extracted from a validated token
#[derive(Debug, Clone)]
pub struct TokenIdentity {
    pub user_id: UserId,
    pub email: String,
}

/// Issues and validates HS256 identity tokens
///
/// Holds the symmetric signing secret. Construct once at startup from
/// configuration and share via `Arc`.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    /// Create a token service from the raw signing secret
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        }
    }

    /// Issue a signed token for the given identity, valid for `ttl`
    pub fn issue(
        &self,
        user_id: UserId,
        email: &str,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_owned(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(TokenError::Signing)
    }

    /// Validate a token and extract the identity it asserts
    ///
    /// Rejects tokens that are expired, tampered with, signed with a
    /// different secret, or signed with any algorithm other than HS256.
    pub fn validate(&self, token: &str) -> Result<TokenIdentity, TokenError> {
        let validation = Validation::new(Algorithm::HS256);

        let data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|_| TokenError::Invalid)?;

        let user_id: UserId = data.claims.sub.parse().map_err(|_| TokenError::Invalid)?;

        Ok(TokenIdentity {
            user_id,
            email: data.claims.email,
        })
    }
}

/// Strip the `Bearer ` prefix from an Authorization header value
///
/// Returns `None` when the value does not use the Bearer scheme.
pub fn strip_bearer(header_value: &str) -> Option<&str> {
    header_value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new(b"test-secret-key-for-unit-tests")
    }

    #[test]
    fn test_issue_and_validate_roundtrip() {
        let svc = service();
        let user_id = UserId::new();

        let token = svc
            .issue(user_id, "alice@example.com", Duration::hours(24))
            .unwrap();
        let identity = svc.validate(&token).unwrap();

        assert_eq!(identity.user_id, user_id);
        assert_eq!(identity.email, "alice@example.com");
    }

    #[test]
    fn test_tampered_token_rejected() {
        let svc = service();
        let token = svc
            .issue(UserId::new(), "alice@example.com", Duration::hours(24))
            .unwrap();

        // Flip a character in the payload section
        let mut tampered: Vec<char> = token.chars().collect();
        let dot = token.find('.').unwrap();
        tampered[dot + 1] = if tampered[dot + 1] == 'A' { 'B' } else { 'A' };
        let tampered: String = tampered.into_iter().collect();

        assert!(matches!(svc.validate(&tampered), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let svc = service();
        let other = TokenService::new(b"a-completely-different-secret");

        let token = svc
            .issue(UserId::new(), "alice@example.com", Duration::hours(24))
            .unwrap();

        assert!(matches!(other.validate(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_expired_token_rejected() {
        let svc = service();
        let token = svc
            .issue(UserId::new(), "alice@example.com", Duration::hours(-1))
            .unwrap();

        assert!(matches!(svc.validate(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let svc = service();
        assert!(matches!(
            svc.validate("not.a.token"),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn test_strip_bearer() {
        assert_eq!(strip_bearer("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(strip_bearer("Basic abc"), None);
        assert_eq!(strip_bearer("Bearer "), None);
        assert_eq!(strip_bearer("abc.def.ghi"), None);
    }
}
