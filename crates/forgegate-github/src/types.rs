//! Response types for the GitHub API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity of the authenticated GitHub user.
///
/// Only the fields the session needs; everything else in the response
/// is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubUser {
    pub id: i64,
    pub login: String,
}

/// Normalized projection of an upstream repository record.
///
/// Exactly the fields the frontend consumes; unknown upstream fields
/// are dropped during deserialization. Produced fresh on every call,
/// never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoSummary {
    pub id: i64,
    pub name: String,
    pub full_name: String,
    pub private: bool,
    pub html_url: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_summary_drops_unknown_fields() {
        let upstream = serde_json::json!({
            "id": 1296269,
            "name": "hello-world",
            "full_name": "octocat/hello-world",
            "private": false,
            "html_url": "https://github.com/octocat/hello-world",
            "description": "My first repository",
            "language": "Rust",
            "updated_at": "2024-05-05T12:00:00Z",
            // Fields the projection must not carry.
            "node_id": "MDEwOlJlcG9zaXRvcnkxMjk2MjY5",
            "fork": false,
            "stargazers_count": 80,
            "owner": {"login": "octocat", "id": 1}
        });

        let summary: RepoSummary = serde_json::from_value(upstream).unwrap();
        assert_eq!(summary.name, "hello-world");
        assert_eq!(summary.language.as_deref(), Some("Rust"));

        let serialized = serde_json::to_value(&summary).unwrap();
        let keys: Vec<&str> = serialized.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys.len(),
            8,
            "projection must expose exactly the documented fields, got {keys:?}"
        );
    }

    #[test]
    fn test_repo_summary_null_description_and_language() {
        let upstream = serde_json::json!({
            "id": 1,
            "name": "scratch",
            "full_name": "octocat/scratch",
            "private": true,
            "html_url": "https://github.com/octocat/scratch",
            "description": null,
            "language": null,
            "updated_at": "2024-01-01T00:00:00Z"
        });

        let summary: RepoSummary = serde_json::from_value(upstream).unwrap();
        assert!(summary.description.is_none());
        assert!(summary.language.is_none());

        // Nulls stay present in the serialized projection.
        let serialized = serde_json::to_value(&summary).unwrap();
        assert!(serialized.as_object().unwrap().contains_key("description"));
    }

    #[test]
    fn test_user_identity_parses() {
        let user: GitHubUser =
            serde_json::from_str(r#"{"id": 42, "login": "alice", "site_admin": false}"#).unwrap();
        assert_eq!(user.id, 42);
        assert_eq!(user.login, "alice");
    }
}
