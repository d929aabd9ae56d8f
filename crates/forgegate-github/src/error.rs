//! Error types for the GitHub client.

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, GitHubError>;

/// Errors that can occur talking to GitHub.
#[derive(Debug, thiserror::Error)]
pub enum GitHubError {
    /// The code exchange completed without a usable access credential.
    #[error("GitHub access token not received: {0}")]
    AuthExchange(String),

    /// GitHub replied with a non-success status. Status and body are
    /// carried verbatim so callers can forward them unchanged.
    #[error("GitHub API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// Transport failure (connect, TLS, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// A successful response did not match the expected shape.
    #[error("unexpected GitHub response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for GitHubError {
    fn from(e: reqwest::Error) -> Self {
        GitHubError::Network(e.to_string())
    }
}
