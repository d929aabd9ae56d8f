//! GitHub HTTP client: OAuth exchange and repository listing.

use std::time::Duration;

use reqwest::header;
use serde::{Deserialize, Serialize};

use crate::error::{GitHubError, Result};
use crate::types::{GitHubUser, RepoSummary};

/// GitHub authorization endpoint.
pub const GITHUB_AUTHORIZE_URL: &str = "https://github.com/login/oauth/authorize";

/// GitHub token-exchange endpoint.
pub const GITHUB_TOKEN_URL: &str = "https://github.com/login/oauth/access_token";

/// GitHub REST API base URL.
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Scopes requested during authorization: repository read access,
/// user profile, user email.
pub const OAUTH_SCOPE: &str = "repo read:user user:email";

/// Accept header for the REST API.
const GITHUB_JSON: &str = "application/vnd.github+json";

/// User-Agent sent on every request; GitHub rejects requests without one.
const USER_AGENT: &str = concat!("forgegate/", env!("CARGO_PKG_VERSION"));

/// Repositories fetched per listing call. Single page, no pagination.
const REPOS_PER_PAGE: &str = "100";

/// Default timeout applied to every outbound call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// GitHub OAuth application credentials and endpoints.
///
/// Endpoint URLs default to the public GitHub endpoints and are only
/// overridden when pointing at a mock server in tests.
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    pub client_id: String,
    pub client_secret: String,
    pub callback_url: String,
    pub authorize_url: String,
    pub token_url: String,
    pub api_base_url: String,
    pub scope: String,
    pub timeout: Duration,
}

impl GitHubConfig {
    /// Config for the public GitHub endpoints.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>, callback_url: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            callback_url: callback_url.into(),
            authorize_url: GITHUB_AUTHORIZE_URL.to_string(),
            token_url: GITHUB_TOKEN_URL.to_string(),
            api_base_url: GITHUB_API_URL.to_string(),
            scope: OAUTH_SCOPE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Point the token-exchange endpoint somewhere else (tests).
    pub fn with_token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = url.into();
        self
    }

    /// Point the REST API base somewhere else (tests).
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Override the outbound request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Serialize)]
struct ExchangeRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    code: &'a str,
}

/// GitHub answers the exchange with HTTP 200 even on failure; the
/// error shows up as fields in the body instead of a status code.
#[derive(Debug, Deserialize)]
struct ExchangeResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
}

/// Client for GitHub's OAuth and REST endpoints.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    config: GitHubConfig,
}

impl GitHubClient {
    /// Build a client. The timeout and User-Agent apply to every
    /// request the client makes.
    pub fn new(config: GitHubConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { http, config })
    }

    /// Get the config.
    pub fn config(&self) -> &GitHubConfig {
        &self.config
    }

    /// Build the authorization URL the browser is redirected to.
    pub fn authorize_url(&self) -> String {
        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("redirect_uri", self.config.callback_url.as_str()),
            ("scope", self.config.scope.as_str()),
        ];

        let query = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.config.authorize_url, query)
    }

    /// Exchange a one-time authorization code for an access credential.
    pub async fn exchange_code(&self, code: &str) -> Result<String> {
        let request_body = ExchangeRequest {
            client_id: &self.config.client_id,
            client_secret: &self.config.client_secret,
            code,
        };

        let response = self
            .http
            .post(&self.config.token_url)
            .header(header::ACCEPT, "application/json")
            .form(&request_body)
            .send()
            .await?;

        let payload: ExchangeResponse = response
            .json()
            .await
            .map_err(|e| GitHubError::AuthExchange(format!("unreadable token response: {e}")))?;

        match payload.access_token {
            Some(token) if !token.is_empty() => Ok(token),
            _ => {
                let reason = payload
                    .error_description
                    .or(payload.error)
                    .unwrap_or_else(|| "no access token in response".to_string());
                Err(GitHubError::AuthExchange(reason))
            }
        }
    }

    /// Fetch the authenticated user's identity.
    ///
    /// OAuth app credentials use the `token` authorization scheme, not
    /// `Bearer` — GitHub rejects the latter for these tokens.
    pub async fn fetch_user(&self, access_token: &str) -> Result<GitHubUser> {
        let url = format!("{}/user", self.config.api_base_url);

        let response = self
            .http
            .get(&url)
            .header(header::AUTHORIZATION, format!("token {access_token}"))
            .header(header::ACCEPT, GITHUB_JSON)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GitHubError::Api {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| GitHubError::Decode(format!("failed to parse user response: {e}")))
    }

    /// List the authenticated user's repositories, most recently
    /// updated first. One page of up to 100 records, as the upstream
    /// query is written; a non-success status is surfaced verbatim.
    pub async fn list_repositories(&self, access_token: &str) -> Result<Vec<RepoSummary>> {
        let url = format!("{}/user/repos", self.config.api_base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("per_page", REPOS_PER_PAGE), ("sort", "updated")])
            .header(header::AUTHORIZATION, format!("token {access_token}"))
            .header(header::ACCEPT, GITHUB_JSON)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "repository listing failed");
            return Err(GitHubError::Api {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| GitHubError::Decode(format!("failed to parse repository list: {e}")))
    }
}
