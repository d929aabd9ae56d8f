//! Configuration error types.

/// Result type alias for config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur during configuration loading and validation.
///
/// All of these are startup faults: the process reports the error and
/// exits rather than limping along with a partial configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read a config file.
    #[error("failed to read config file '{path}': {source}")]
    ReadFile {
        path: String,
        source: std::io::Error,
    },

    /// Failed to parse TOML.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Missing required field.
    #[error("missing required field '{field}' — set it in the config file or via {env_var}")]
    MissingField {
        field: &'static str,
        env_var: &'static str,
    },

    /// The signing algorithm identifier is not supported.
    #[error("unsupported token algorithm '{0}' (expected HS256, HS384, or HS512)")]
    UnsupportedAlgorithm(String),

    /// The bind address does not parse as `host:port`.
    #[error("invalid bind address '{value}': {source}")]
    InvalidBindAddress {
        value: String,
        source: std::net::AddrParseError,
    },
}
