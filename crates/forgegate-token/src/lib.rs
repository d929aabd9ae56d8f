//! Signed session token codec for Forgegate.
//!
//! A session token is a compact HMAC-signed JWT carrying the GitHub
//! identity and the upstream access credential obtained during the
//! OAuth handshake. The token is the only session state in the system:
//! nothing is stored server-side, and an expired or tampered token is
//! simply rejected on next use.
//!
//! # Components
//!
//! - [`claims`] — the [`SessionClaims`] payload
//! - [`codec`] — [`TokenCodec`]: encode (sign) and decode (verify)

pub mod claims;
pub mod codec;
pub mod error;

pub use claims::SessionClaims;
pub use codec::TokenCodec;
pub use error::{Result, TokenError};
