//! Repository listing proxy.

use axum::{Extension, Json, extract::State};

use forgegate_github::RepoSummary;
use forgegate_token::SessionClaims;

use crate::error::ServerError;
use crate::state::AppState;

/// GET /github/repos - List the authenticated user's repositories.
///
/// The session middleware has already verified the token; this handler
/// still refuses claims that carry no upstream credential before any
/// outbound call is made.
pub async fn list_repos_handler(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
) -> Result<Json<Vec<RepoSummary>>, ServerError> {
    let access_token = claims
        .github_access_token
        .as_deref()
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            ServerError::Unauthorized("session token carries no GitHub credential".to_string())
        })?;

    let repos = state.github.list_repositories(access_token).await?;
    Ok(Json(repos))
}
