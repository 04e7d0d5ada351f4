//! Shared-secret admin gate.
//!
//! The dashboard logs in with the admin hash and receives the same value
//! back as its bearer token. Nothing is issued, rotated or expired.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::state::AppState;
use crate::utils::error::AppError;

pub fn secret_matches(candidate: &str, secret: &str) -> bool {
    candidate == secret
}

/// Token part of an `Authorization` header value.
pub fn bearer_token(header_value: &str) -> &str {
    header_value
        .strip_prefix("Bearer ")
        .unwrap_or(header_value)
        .trim()
}

/// Proof that the request carried the admin secret as its bearer token.
#[derive(Debug, Clone, Copy)]
pub struct AdminSession;

#[async_trait]
impl<S> FromRequestParts<S> for AdminSession
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);

        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(bearer_token)
            .filter(|token| !token.is_empty());

        match token {
            Some(token) if secret_matches(token, &state.config.admin_hash) => Ok(AdminSession),
            _ => Err(AppError::AuthError(
                "Access denied. Invalid token.".to_string(),
            )),
        }
    }
}
