//! Shared helpers for server integration tests.

use axum::Router;
use forgegate_github::{GitHubClient, GitHubConfig};
use forgegate_server::{AppState, Server, ServerConfig};
use forgegate_token::TokenCodec;
use wiremock::MockServer;

pub const TOKEN_SECRET: &str = "integration-test-secret";
pub const FRONTEND_URL: &str = "http://localhost:5173";

/// Codec matching the one the router under test issues with.
pub fn codec() -> TokenCodec {
    TokenCodec::new(TOKEN_SECRET, "HS256", 60).unwrap()
}

/// Build a router whose GitHub endpoints point at the given mock server.
pub fn router_for(mock: &MockServer) -> Router {
    let github_config = GitHubConfig::new(
        "client-id",
        "client-secret",
        "http://localhost:8000/auth/github/callback",
    )
    .with_token_url(format!("{}/login/oauth/access_token", mock.uri()))
    .with_api_base_url(mock.uri());

    let github = GitHubClient::new(github_config).unwrap();
    let config = ServerConfig::default().with_frontend_base_url(FRONTEND_URL);

    Server::new(AppState::new(github, codec(), config)).router()
}
