//! Error types for the session token codec.

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, TokenError>;

/// Errors that can occur when issuing or verifying session tokens.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// Signature mismatch, malformed structure, or expired token.
    ///
    /// Deliberately carries no detail: verification is all-or-nothing
    /// and callers must not branch on the rejection reason.
    #[error("invalid session token")]
    InvalidToken,

    /// Signing failed while encoding a token.
    #[error("failed to sign session token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    /// The configured algorithm identifier is not a supported HMAC variant.
    #[error("unsupported signing algorithm '{0}' (expected HS256, HS384, or HS512)")]
    UnsupportedAlgorithm(String),
}
