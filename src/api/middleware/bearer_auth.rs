//! Bearer token authentication gate
//!
//! Handlers that take [`RequireToken`] as their first argument never run
//! unless the request carries a token the token service accepts. Every
//! failure is answered with `401 Invalid JWT Token`.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::infrastructure::auth::JwtClaims;

/// Extractor that requires a valid bearer token
///
/// The claims are exposed but not consulted for per-resource access.
#[derive(Debug, Clone)]
pub struct RequireToken(pub JwtClaims);

impl FromRequestParts<AppState> for RequireToken {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(&parts.headers).ok_or_else(|| {
            debug!("Rejecting request without a bearer token");
            ApiError::unauthorized()
        })?;

        let claims = state.token_service.verify(token).map_err(|e| {
            debug!(error = %e, "Rejecting request with invalid token");
            ApiError::unauthorized()
        })?;

        Ok(RequireToken(claims))
    }
}

/// Second whitespace-separated segment of the Authorization header
///
/// The scheme word itself is not checked.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .split_whitespace()
        .nth(1)
}
