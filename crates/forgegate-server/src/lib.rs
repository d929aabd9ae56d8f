//! HTTP surface for Forgegate.
//!
//! Four endpoints glue the OAuth handshake, the session token codec,
//! and the repository proxy together:
//!
//! - `GET /auth/github/login` — 302 to GitHub's authorization page
//! - `GET /auth/github/callback` — code exchange, token mint, 302 back
//!   to the frontend with the token as a query parameter
//! - `GET /github/repos` — token-gated repository listing proxy
//! - `GET /health` — liveness probe
//!
//! The service is fully stateless between requests: the session token
//! held by the client is the only state carrier.
//!
//! # Example
//!
//! ```ignore
//! use forgegate_server::{AppState, Server, ServerConfig};
//!
//! let state = AppState::new(github_client, token_codec, ServerConfig::default());
//! Server::new(state).run().await?;
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use auth::session_auth_middleware;
pub use config::ServerConfig;
pub use error::{ErrorResponse, Result, ServerError};
pub use state::AppState;

use axum::{Router, middleware};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// The Forgegate HTTP server.
pub struct Server {
    /// Application state.
    state: AppState,
}

impl Server {
    /// Create a new server from a pre-built application state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Build the router with all routes and middleware.
    pub fn router(&self) -> Router {
        use axum::routing::get;

        let mut router = Router::new()
            // Health and browser-facing flows (no session token)
            .merge(routes::health_routes())
            .route("/auth/github/login", get(routes::login_handler))
            .route("/auth/github/callback", get(routes::callback_handler))
            // Token-gated API
            .merge(self.api_routes())
            // Request tracing
            .layer(TraceLayer::new_for_http());

        if self.state.config.enable_cors {
            router = router.layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            );
        }

        router.with_state(self.state.clone())
    }

    /// Routes that require a valid session token.
    fn api_routes(&self) -> Router<AppState> {
        use axum::routing::get;

        Router::new()
            .route("/github/repos", get(routes::list_repos_handler))
            .layer(middleware::from_fn_with_state(
                self.state.clone(),
                auth::session_auth_middleware,
            ))
    }

    /// Run the server.
    pub async fn run(self) -> Result<()> {
        let addr = self.state.config.bind_address;
        let router = self.router();

        info!("Starting server on {}", addr);

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::Internal(format!("Failed to bind: {e}")))?;

        axum::serve(listener, router)
            .await
            .map_err(|e| ServerError::Internal(format!("Server error: {e}")))?;

        Ok(())
    }
}
