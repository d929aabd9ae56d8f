//! GitHub client for Forgegate.
//!
//! Two concerns, both plain HTTP collaborations with GitHub:
//!
//! - OAuth exchange: authorization URL construction, trading a one-time
//!   code for an access credential, and fetching the authenticated
//!   user's identity
//! - Repository listing: the single authenticated read-only API call
//!   the service proxies, normalized into [`RepoSummary`] records
//!
//! No retries, no pagination beyond the first page, no caching. Every
//! outbound call carries a bounded timeout.

pub mod client;
pub mod error;
pub mod types;

pub use client::{GitHubClient, GitHubConfig, OAUTH_SCOPE};
pub use error::{GitHubError, Result};
pub use types::{GitHubUser, RepoSummary};
