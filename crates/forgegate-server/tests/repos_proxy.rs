//! Repository proxy integration tests.

mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::Utc;
use forgegate_token::SessionClaims;
use tower::ServiceExt;
use wiremock::matchers::{header as header_matcher, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn repos_request(token: &str) -> Request<Body> {
    Request::builder()
        .uri("/github/repos")
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_repos_without_token_is_unauthorized() {
    let mock = MockServer::start().await;
    let app = common::router_for(&mock);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/github/repos")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_repos_with_expired_token_is_unauthorized() {
    let mock = MockServer::start().await;
    let app = common::router_for(&mock);

    let expired = common::codec()
        .encode(&SessionClaims {
            github_id: 42,
            username: "alice".to_string(),
            github_access_token: Some("tok_xyz".to_string()),
            exp: Utc::now().timestamp() - 3600,
        })
        .unwrap();

    let response = app.oneshot(repos_request(&expired)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_repos_without_embedded_credential_skips_upstream() {
    let mock = MockServer::start().await;

    // The proxy must refuse before any upstream call is attempted.
    Mock::given(method("GET"))
        .and(path("/user/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(0)
        .mount(&mock)
        .await;

    let app = common::router_for(&mock);
    let bare = common::codec()
        .encode(&SessionClaims {
            github_id: 42,
            username: "alice".to_string(),
            github_access_token: None,
            exp: Utc::now().timestamp() + 300,
        })
        .unwrap();

    let response = app.oneshot(repos_request(&bare)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["code"], "unauthorized");
}

#[tokio::test]
async fn test_repos_lists_and_projects_upstream_records() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/repos"))
        .and(query_param("per_page", "100"))
        .and(query_param("sort", "updated"))
        .and(header_matcher("authorization", "token tok_xyz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": 2,
                "name": "newer",
                "full_name": "alice/newer",
                "private": false,
                "html_url": "https://github.com/alice/newer",
                "description": "fresh",
                "language": "Rust",
                "updated_at": "2024-06-01T00:00:00Z",
                "stargazers_count": 5,
                "owner": {"login": "alice"}
            },
            {
                "id": 1,
                "name": "older",
                "full_name": "alice/older",
                "private": true,
                "html_url": "https://github.com/alice/older",
                "description": null,
                "language": null,
                "updated_at": "2023-01-01T00:00:00Z"
            }
        ])))
        .mount(&mock)
        .await;

    let app = common::router_for(&mock);
    let token = common::codec().issue(42, "alice", "tok_xyz").unwrap();

    let response = app.oneshot(repos_request(&token)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let repos = body.as_array().unwrap();

    // Upstream ordering preserved.
    assert_eq!(repos.len(), 2);
    assert_eq!(repos[0]["name"], "newer");
    assert_eq!(repos[1]["name"], "older");

    // Exactly the documented projection, nothing else.
    for repo in repos {
        let keys: Vec<&str> = repo.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 8, "unexpected projection fields: {keys:?}");
        for key in [
            "id",
            "name",
            "full_name",
            "private",
            "html_url",
            "description",
            "language",
            "updated_at",
        ] {
            assert!(repo.get(key).is_some(), "missing projection field {key}");
        }
    }
}

#[tokio::test]
async fn test_repos_upstream_failure_passes_through() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/repos"))
        .respond_with(ResponseTemplate::new(403).set_body_string("rate limited"))
        .mount(&mock)
        .await;

    let app = common::router_for(&mock);
    let token = common::codec().issue(42, "alice", "tok_xyz").unwrap();

    let response = app.oneshot(repos_request(&token)).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body["code"], "upstream_error");
    assert_eq!(body["message"], "rate limited");
}
