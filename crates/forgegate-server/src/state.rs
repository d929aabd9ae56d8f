//! Application state shared across handlers.

use std::sync::Arc;

use forgegate_github::GitHubClient;
use forgegate_token::TokenCodec;

use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// Everything in here is immutable after startup; requests share it
/// read-only and no locking is needed.
#[derive(Clone)]
pub struct AppState {
    /// GitHub OAuth and API client.
    pub github: Arc<GitHubClient>,

    /// Session token codec.
    pub tokens: Arc<TokenCodec>,

    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(github: GitHubClient, tokens: TokenCodec, config: ServerConfig) -> Self {
        Self {
            github: Arc::new(github),
            tokens: Arc::new(tokens),
            config: Arc::new(config),
        }
    }
}
