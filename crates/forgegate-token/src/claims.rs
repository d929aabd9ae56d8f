//! Session claims payload.

use serde::{Deserialize, Serialize};

/// Claims embedded in every session token.
///
/// Created once at the end of the OAuth handshake and read-only
/// thereafter. The embedded GitHub credential is a secret: it is
/// redacted from `Debug` output and must never be logged or exposed
/// to the frontend.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// GitHub user id, immutable once issued.
    pub github_id: i64,

    /// GitHub login, immutable once issued.
    pub username: String,

    /// Upstream access credential carried inside the token.
    ///
    /// Optional on decode so the resource proxy can reject its absence
    /// explicitly instead of trusting the issuance flow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_access_token: Option<String>,

    /// Expiry as Unix seconds. The token is invalid strictly after
    /// this instant.
    pub exp: i64,
}

impl SessionClaims {
    /// Whether the claims carry a usable upstream credential.
    pub fn has_credential(&self) -> bool {
        self.github_access_token
            .as_deref()
            .is_some_and(|t| !t.is_empty())
    }
}

impl std::fmt::Debug for SessionClaims {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionClaims")
            .field("github_id", &self.github_id)
            .field("username", &self.username)
            .field(
                "github_access_token",
                &self.github_access_token.as_ref().map(|_| "<redacted>"),
            )
            .field("exp", &self.exp)
            .finish()
    }
}
