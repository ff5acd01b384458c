//! Integration tests for the Reddit client handle against a mock server.

use mockito::{Matcher, Server};
use snam_clients::{
    social_client, ClientError, HttpConfig, Platform, PlatformClient, RedditConfig, Secret,
};

/// base64("test-id:test-secret")
const BASIC_AUTH: &str = "Basic dGVzdC1pZDp0ZXN0LXNlY3JldA==";

fn config_for(server: &Server) -> RedditConfig {
    RedditConfig {
        client_id: Some("test-id".to_string()),
        client_secret: Some(Secret::new("test-secret")),
        base_url: server.url(),
        ..Default::default()
    }
}

fn http() -> HttpConfig {
    HttpConfig { timeout_secs: 5 }
}

#[tokio::test]
async fn test_verify_success() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/access_token")
        .match_header("authorization", BASIC_AUTH)
        .match_header("user-agent", "client for SNAM2024")
        .match_body(Matcher::UrlEncoded(
            "grant_type".to_string(),
            "client_credentials".to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token": "abc123", "token_type": "bearer", "expires_in": 86400, "scope": "*"}"#)
        .create_async()
        .await;

    let client = social_client(&config_for(&server), &http()).unwrap();
    client.verify().await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_construction_does_not_contact_server() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = social_client(&config_for(&server), &http()).unwrap();
    assert_eq!(client.endpoint(), server.url());

    mock.assert_async().await;
}

#[tokio::test]
async fn test_verify_unauthorized() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/v1/access_token")
        .with_status(401)
        .with_body(r#"{"message": "Unauthorized", "error": 401}"#)
        .create_async()
        .await;

    let client = social_client(&config_for(&server), &http()).unwrap();
    let err = client.verify().await.unwrap_err();

    assert!(matches!(
        err,
        ClientError::InvalidCredentials {
            platform: Platform::Reddit,
            status: 401,
            ..
        }
    ));
}

#[tokio::test]
async fn test_verify_error_in_success_body() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/v1/access_token")
        .with_status(200)
        .with_body(r#"{"error": "invalid_grant"}"#)
        .create_async()
        .await;

    let client = social_client(&config_for(&server), &http()).unwrap();
    let err = client.verify().await.unwrap_err();

    assert!(matches!(err, ClientError::InvalidCredentials { status: 200, .. }));
}

#[tokio::test]
async fn test_verify_numeric_error_in_success_body() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/v1/access_token")
        .with_status(200)
        .with_body(r#"{"message":"Unauthorized","error":401}"#)
        .create_async()
        .await;

    let client = social_client(&config_for(&server), &http()).unwrap();
    let err = client.verify().await.unwrap_err();

    assert!(matches!(
        err,
        ClientError::InvalidCredentials {
            platform: Platform::Reddit,
            status: 200,
            ..
        }
    ));
}

#[tokio::test]
async fn test_verify_unexpected_status() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/v1/access_token")
        .with_status(503)
        .with_body("upstream unavailable")
        .create_async()
        .await;

    let client = social_client(&config_for(&server), &http()).unwrap();
    let err = client.verify().await.unwrap_err();

    match err {
        ClientError::UnexpectedStatus { status, body, .. } => {
            assert_eq!(status, 503);
            assert_eq!(body, "upstream unavailable");
        }
        other => panic!("Expected UnexpectedStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_verify_scrubs_echoed_token() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/v1/access_token")
        .with_status(200)
        .with_body(r#"{"access_token": "leaked-token-value", "error": "confused"}"#)
        .create_async()
        .await;

    let client = social_client(&config_for(&server), &http()).unwrap();
    let err = client.verify().await.unwrap_err();

    let message = err.to_string();
    assert!(!message.contains("leaked-token-value"));
    assert!(message.contains("[REDACTED]"));
}

#[tokio::test]
async fn test_verify_scrubs_echoed_secret() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/v1/access_token")
        .with_status(401)
        .with_body(r#"{"message": "bad pair", "echo": "test-secret"}"#)
        .create_async()
        .await;

    let client = social_client(&config_for(&server), &http()).unwrap();
    let err = client.verify().await.unwrap_err();

    let message = err.to_string();
    assert!(!message.contains("test-secret"));
    assert!(message.contains("bad pair"));
}

#[tokio::test]
async fn test_verify_connection_refused_is_network_error() {
    let config = RedditConfig {
        client_id: Some("test-id".to_string()),
        client_secret: Some(Secret::new("test-secret")),
        base_url: "http://127.0.0.1:1".to_string(),
        ..Default::default()
    };

    let client = social_client(&config, &http()).unwrap();
    let err = client.verify().await.unwrap_err();

    assert!(matches!(
        err,
        ClientError::Network {
            platform: Platform::Reddit,
            ..
        }
    ));
}
