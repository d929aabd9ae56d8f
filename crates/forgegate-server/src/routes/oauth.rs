//! OAuth login and callback endpoints.
//!
//! The issuance flow is linear with no retries: callback receives the
//! one-time code, exchanges it for an access credential, fetches the
//! user's identity, mints a session token, and redirects the browser
//! back to the frontend with the token as a query parameter. That
//! redirect is the sole hand-off mechanism — no cookie, no server-side
//! session.

use axum::{
    body::Body,
    extract::{Query, State},
    http::{StatusCode, header},
    response::Response,
};
use serde::Deserialize;

use crate::error::ServerError;
use crate::state::AppState;

/// Query parameters for the OAuth callback.
#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    /// One-time authorization code from GitHub.
    pub code: Option<String>,
}

/// GET /auth/github/login - Redirect the browser to GitHub's
/// authorization page.
pub async fn login_handler(State(state): State<AppState>) -> Result<Response, ServerError> {
    found(&state.github.authorize_url())
}

/// GET /auth/github/callback - Complete the OAuth handshake and hand a
/// session token to the frontend.
pub async fn callback_handler(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> Result<Response, ServerError> {
    let code = params
        .code
        .ok_or_else(|| ServerError::BadRequest("missing 'code' query parameter".to_string()))?;

    let access_token = state.github.exchange_code(&code).await?;
    let user = state.github.fetch_user(&access_token).await?;

    let token = state
        .tokens
        .issue(user.id, &user.login, &access_token)
        .map_err(|e| ServerError::Internal(e.to_string()))?;

    tracing::info!(github_id = user.id, username = %user.login, "session issued");

    let location = format!(
        "{}/dashboard?token={}",
        state.config.frontend_base_url, token
    );
    found(&location)
}

/// Build a 302 response pointing the browser at `location`.
fn found(location: &str) -> Result<Response, ServerError> {
    Response::builder()
        .status(StatusCode::FOUND)
        .header(header::LOCATION, location)
        .body(Body::empty())
        .map_err(|e| ServerError::Internal(format!("failed to build redirect: {e}")))
}
