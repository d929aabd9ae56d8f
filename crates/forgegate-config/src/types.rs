//! Configuration types.

use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Supported HMAC signing algorithms for session tokens.
const SUPPORTED_ALGORITHMS: [&str; 3] = ["HS256", "HS384", "HS512"];

/// Top-level configuration.
///
/// Loaded once at startup, validated, then handed to each component as
/// an explicit value. Nothing reads configuration ambiently after that.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub github: GitHubSettings,
    pub token: TokenSettings,
    pub server: ServerSettings,
    pub http: HttpSettings,
}

/// GitHub OAuth application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubSettings {
    /// OAuth app client id. Required.
    pub client_id: String,
    /// OAuth app client secret. Required; prefer the env override to
    /// keep it out of config files.
    pub client_secret: String,
    /// Callback URL registered with the OAuth app.
    pub callback_url: String,
    /// Authorization endpoint. Only overridden in tests.
    pub authorize_url: String,
    /// Token-exchange endpoint. Only overridden in tests.
    pub token_url: String,
    /// REST API base URL. Only overridden in tests.
    pub api_base_url: String,
}

impl Default for GitHubSettings {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            callback_url: "http://localhost:8000/auth/github/callback".to_string(),
            authorize_url: "https://github.com/login/oauth/authorize".to_string(),
            token_url: "https://github.com/login/oauth/access_token".to_string(),
            api_base_url: "https://api.github.com".to_string(),
        }
    }
}

/// Session token settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenSettings {
    /// Symmetric signing secret. Required, non-empty.
    pub secret: String,
    /// Signing algorithm identifier.
    pub algorithm: String,
    /// Token lifetime in minutes.
    pub ttl_minutes: u64,
}

impl Default for TokenSettings {
    fn default() -> Self {
        Self {
            secret: String::new(),
            algorithm: "HS256".to_string(),
            ttl_minutes: 60,
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Address to bind the server to.
    pub bind_address: String,
    /// Base URL the browser is redirected to after login.
    pub frontend_base_url: String,
    /// Attach a permissive CORS layer for the frontend origin split.
    pub enable_cors: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8000".to_string(),
            frontend_base_url: "http://localhost:5173".to_string(),
            enable_cors: true,
        }
    }
}

/// Outbound HTTP settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    /// Timeout in seconds applied to every outbound call.
    pub timeout_secs: u64,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self { timeout_secs: 10 }
    }
}

impl Config {
    /// Validate required fields and well-formedness.
    ///
    /// A configuration that fails here never reaches the components:
    /// startup aborts with the error instead.
    pub fn validate(&self) -> Result<()> {
        if self.github.client_id.is_empty() {
            return Err(ConfigError::MissingField {
                field: "github.client_id",
                env_var: "FORGEGATE_GITHUB_CLIENT_ID",
            });
        }
        if self.github.client_secret.is_empty() {
            return Err(ConfigError::MissingField {
                field: "github.client_secret",
                env_var: "FORGEGATE_GITHUB_CLIENT_SECRET",
            });
        }
        if self.token.secret.is_empty() {
            return Err(ConfigError::MissingField {
                field: "token.secret",
                env_var: "FORGEGATE_TOKEN_SECRET",
            });
        }
        if !SUPPORTED_ALGORITHMS.contains(&self.token.algorithm.as_str()) {
            return Err(ConfigError::UnsupportedAlgorithm(
                self.token.algorithm.clone(),
            ));
        }
        self.bind_address()?;
        Ok(())
    }

    /// Parse the configured bind address.
    pub fn bind_address(&self) -> Result<SocketAddr> {
        self.server
            .bind_address
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddress {
                value: self.server.bind_address.clone(),
                source,
            })
    }
}
