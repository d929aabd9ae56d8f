//! Configuration system for Forgegate.
//!
//! TOML-based configuration with:
//! - An explicit `--config` path, or the XDG default location
//! - Environment-variable overrides for deployment and secrets
//! - Startup validation — a bad config aborts before the server binds
//!
//! Once loaded the configuration is immutable; components receive it
//! as explicit values, never through ambient lookups.

pub mod error;
pub mod types;

pub use error::{ConfigError, Result};
pub use types::{Config, GitHubSettings, HttpSettings, ServerSettings, TokenSettings};

use std::path::{Path, PathBuf};

/// Default config file location under the XDG config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("forgegate").join("forgegate.toml"))
}

/// Load, override from the environment, and validate the configuration.
///
/// With an explicit path the file must exist. Without one, the XDG
/// default is used if present; otherwise the built-in defaults apply
/// and the environment must supply the required values.
pub fn load_config(explicit_path: Option<&Path>) -> Result<Config> {
    let mut config = match explicit_path {
        Some(path) => load_config_file(path)?,
        None => match default_config_path().filter(|p| p.exists()) {
            Some(path) => load_config_file(&path)?,
            None => Config::default(),
        },
    };

    apply_env_overrides(&mut config);
    config.validate()?;
    Ok(config)
}

/// Load and parse a single TOML config file.
pub fn load_config_file(path: &Path) -> Result<Config> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    Ok(toml::from_str(&contents)?)
}

/// Apply `FORGEGATE_*` environment overrides.
pub fn apply_env_overrides(config: &mut Config) {
    apply_overrides(config, |name| std::env::var(name).ok());
}

fn apply_overrides(config: &mut Config, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("FORGEGATE_GITHUB_CLIENT_ID") {
        config.github.client_id = v;
    }
    if let Some(v) = lookup("FORGEGATE_GITHUB_CLIENT_SECRET") {
        config.github.client_secret = v;
    }
    if let Some(v) = lookup("FORGEGATE_CALLBACK_URL") {
        config.github.callback_url = v;
    }
    if let Some(v) = lookup("FORGEGATE_TOKEN_SECRET") {
        config.token.secret = v;
    }
    if let Some(v) = lookup("FORGEGATE_BIND_ADDRESS") {
        config.server.bind_address = v;
    }
    if let Some(v) = lookup("FORGEGATE_FRONTEND_URL") {
        config.server.frontend_base_url = v;
    }
}
