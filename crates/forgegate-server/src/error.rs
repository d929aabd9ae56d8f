//! Error types for the server.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use forgegate_github::GitHubError;

/// Server error type.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Session token missing, invalid, or lacking a usable credential.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Malformed request from the client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The OAuth code exchange produced no usable credential.
    #[error("GitHub access token not received: {0}")]
    AuthExchange(String),

    /// GitHub replied with a non-success status; forwarded verbatim.
    #[error("GitHub API error ({status}): {body}")]
    Upstream { status: u16, body: String },

    /// Could not reach GitHub at all.
    #[error("GitHub unreachable: {0}")]
    UpstreamUnavailable(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<GitHubError> for ServerError {
    fn from(e: GitHubError) -> Self {
        match e {
            GitHubError::AuthExchange(msg) => ServerError::AuthExchange(msg),
            GitHubError::Api { status, body } => ServerError::Upstream { status, body },
            GitHubError::Network(msg) => ServerError::UpstreamUnavailable(msg),
            GitHubError::Decode(msg) => ServerError::UpstreamUnavailable(msg),
        }
    }
}

/// Result type for server operations.
pub type Result<T> = std::result::Result<T, ServerError>;

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ServerError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, "unauthorized", msg.clone())
            }
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            ServerError::AuthExchange(msg) => {
                (StatusCode::BAD_REQUEST, "auth_exchange_failed", msg.clone())
            }
            // Upstream status and body are forwarded as-is, never
            // reinterpreted.
            ServerError::Upstream { status, body } => (
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                "upstream_error",
                body.clone(),
            ),
            ServerError::UpstreamUnavailable(msg) => {
                (StatusCode::BAD_GATEWAY, "upstream_unavailable", msg.clone())
            }
            ServerError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg.clone())
            }
        };

        match &self {
            ServerError::Internal(_) => {
                tracing::error!(status = %status, code, error = %message, "Server error");
            }
            _ => {
                tracing::warn!(status = %status, code, error = %message, "Request failed");
            }
        }

        let body = ErrorResponse {
            code: code.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_upstream_error_passes_status_and_body_through() {
        let err = ServerError::Upstream {
            status: 403,
            body: "rate limited".to_string(),
        };
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let body = body_json(response).await;
        assert_eq!(body["code"], "upstream_error");
        assert_eq!(body["message"], "rate limited");
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_401() {
        let response = ServerError::Unauthorized("no token".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_unmappable_upstream_status_becomes_bad_gateway() {
        let err = ServerError::Upstream {
            status: 9999,
            body: "?".to_string(),
        };
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_github_error_conversion() {
        let e: ServerError = GitHubError::AuthExchange("no code".to_string()).into();
        assert!(matches!(e, ServerError::AuthExchange(_)));

        let e: ServerError = GitHubError::Api {
            status: 500,
            body: "boom".to_string(),
        }
        .into();
        assert!(matches!(e, ServerError::Upstream { status: 500, .. }));
    }
}
