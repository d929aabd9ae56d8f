//! Forgegate - GitHub OAuth session gateway.
//!
//! Exchanges a GitHub OAuth code for a short-lived signed session
//! token and proxies the authenticated repository listing.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use forgegate_github::{GitHubClient, GitHubConfig, OAUTH_SCOPE};
use forgegate_server::{AppState, Server, ServerConfig};
use forgegate_token::TokenCodec;

/// Forgegate - GitHub OAuth session gateway
#[derive(Parser)]
#[command(name = "forgegate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "FORGEGATE_CONFIG")]
    config: Option<PathBuf>,

    /// Override the configured bind address
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = forgegate_config::load_config(cli.config.as_deref())?;
    let bind_address = match cli.bind {
        Some(addr) => addr,
        None => config.bind_address()?,
    };

    let github = GitHubClient::new(GitHubConfig {
        client_id: config.github.client_id.clone(),
        client_secret: config.github.client_secret.clone(),
        callback_url: config.github.callback_url.clone(),
        authorize_url: config.github.authorize_url.clone(),
        token_url: config.github.token_url.clone(),
        api_base_url: config.github.api_base_url.clone(),
        scope: OAUTH_SCOPE.to_string(),
        timeout: Duration::from_secs(config.http.timeout_secs),
    })?;

    let tokens = TokenCodec::new(
        &config.token.secret,
        &config.token.algorithm,
        config.token.ttl_minutes,
    )?;

    let server_config = ServerConfig::default()
        .with_bind_address(bind_address)
        .with_frontend_base_url(config.server.frontend_base_url.clone())
        .with_cors(config.server.enable_cors);

    info!(addr = %bind_address, "Starting forgegate");

    let server = Server::new(AppState::new(github, tokens, server_config));
    server.run().await?;

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "forgegate=debug,forgegate_server=debug,forgegate_github=debug,forgegate_token=debug,forgegate_config=debug,info"
    } else {
        "forgegate=info,forgegate_server=info,forgegate_github=info,warn"
    };

    use tracing_subscriber::prelude::*;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_filter(tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}
