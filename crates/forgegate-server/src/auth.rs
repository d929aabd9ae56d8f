//! Session token middleware.
//!
//! Protects token-gated routes: extracts the bearer session token,
//! verifies it through the token codec, and injects the decoded
//! [`SessionClaims`] into request extensions for handlers to read.
//! Handlers never see an unverified token.

use axum::{
    body::Body,
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use forgegate_token::SessionClaims;

use crate::error::ServerError;
use crate::state::AppState;

/// Session authentication middleware.
///
/// Validates the request's session token and injects the claims into
/// request extensions.
pub async fn session_auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ServerError> {
    let claims = authenticate(&request, &state)?;
    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

/// Validate a request's bearer token and return the session claims.
fn authenticate(request: &Request<Body>, state: &AppState) -> Result<SessionClaims, ServerError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(|| ServerError::Unauthorized("missing authorization header".to_string()))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ServerError::Unauthorized("malformed authorization header".to_string()))?;

    let token = auth_str
        .strip_prefix("Bearer ")
        .ok_or_else(|| ServerError::Unauthorized("expected a bearer token".to_string()))?;

    state
        .tokens
        .decode(token)
        .map_err(|_| ServerError::Unauthorized("invalid or expired session token".to_string()))
}
