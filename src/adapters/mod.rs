//! Platform adapters
//!
//! One module per remote platform. Each exposes a factory function that
//! turns injected configuration into a client handle, plus the handle type
//! itself implementing [`PlatformClient`](crate::domain::ports::PlatformClient).

pub mod reddit;
pub mod youtube;

use std::time::Duration;

use reqwest::{Client, Response, Url};

use crate::domain::errors::{ClientError, ClientResult};
use crate::domain::models::{HttpConfig, Platform, Secret};
use crate::infrastructure::logging::SecretScrubber;

pub use reddit::{social_client, RedditClient, RedditCredentials};
pub use youtube::{video_client, YoutubeClient, YoutubeCredentials};

/// Read a required plain-text credential, treating blank values as missing
pub(crate) fn required_value(
    platform: Platform,
    field: &'static str,
    value: Option<&str>,
) -> ClientResult<String> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ClientError::MissingCredential { platform, field }),
    }
}

/// Read a required secret credential, treating blank values as missing
pub(crate) fn required_secret(
    platform: Platform,
    field: &'static str,
    value: Option<&Secret>,
) -> ClientResult<Secret> {
    match value {
        Some(secret) if !secret.is_blank() => Ok(Secret::new(secret.expose().trim())),
        _ => Err(ClientError::MissingCredential { platform, field }),
    }
}

/// Parse and normalize a base URL (no trailing slash)
pub(crate) fn parse_base_url(platform: Platform, raw: &str) -> ClientResult<String> {
    let invalid = |reason: String| ClientError::InvalidBaseUrl {
        platform,
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("expected an http or https URL".to_string()));
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}

/// Build the underlying HTTP client
pub(crate) fn build_http_client(http: &HttpConfig, user_agent: &str) -> ClientResult<Client> {
    Client::builder()
        .timeout(Duration::from_secs(http.timeout_secs))
        .user_agent(user_agent)
        .build()
        .map_err(ClientError::Build)
}

/// Wrap a transport error, dropping the URL it carries
pub(crate) fn network_error(platform: Platform, err: reqwest::Error) -> ClientError {
    ClientError::Network {
        platform,
        source: err.without_url(),
    }
}

/// Read a response body, mapping read failures to a network error
pub(crate) async fn read_body(platform: Platform, response: Response) -> ClientResult<String> {
    response
        .text()
        .await
        .map_err(|e| network_error(platform, e))
}

/// Scrub credentials out of a body before it is embedded in an error.
///
/// The handle's own `secret` is replaced verbatim first, then the generic
/// patterns run over the rest.
pub(crate) fn scrubbed(body: &str, secret: &Secret) -> String {
    let body = if secret.is_blank() {
        body.to_string()
    } else {
        body.replace(secret.expose(), "[REDACTED]")
    };
    SecretScrubber::global().scrub(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_value_trims() {
        let value = required_value(Platform::Reddit, "client_id", Some("  abc  ")).unwrap();
        assert_eq!(value, "abc");
    }

    #[test]
    fn test_required_value_blank_is_missing() {
        let err = required_value(Platform::Reddit, "client_id", Some("   ")).unwrap_err();
        assert!(matches!(
            err,
            ClientError::MissingCredential {
                platform: Platform::Reddit,
                field: "client_id"
            }
        ));
        assert!(required_value(Platform::Reddit, "client_id", None).is_err());
    }

    #[test]
    fn test_required_secret_blank_is_missing() {
        let blank = Secret::new(" ");
        let err = required_secret(Platform::Youtube, "api_key", Some(&blank)).unwrap_err();
        assert!(err.is_missing_credential());
    }

    #[test]
    fn test_scrubbed_redacts_own_secret() {
        let secret = Secret::new("my-secret-key-123");
        let body = r#"{"error":{"message":"API key not valid","key":"my-secret-key-123"}}"#;

        let cleaned = scrubbed(body, &secret);
        assert!(!cleaned.contains("my-secret-key-123"));
        assert!(cleaned.contains("API key not valid"));
        assert!(cleaned.contains("[REDACTED]"));
    }

    #[test]
    fn test_scrubbed_blank_secret_leaves_body() {
        let body = r#"{"message": "Bad Request"}"#;
        assert_eq!(scrubbed(body, &Secret::new("")), body);
    }

    #[test]
    fn test_parse_base_url_strips_trailing_slash() {
        let url = parse_base_url(Platform::Youtube, "https://www.googleapis.com/").unwrap();
        assert_eq!(url, "https://www.googleapis.com");

        let url = parse_base_url(Platform::Reddit, "http://127.0.0.1:1234/proxy/").unwrap();
        assert_eq!(url, "http://127.0.0.1:1234/proxy");
    }

    #[test]
    fn test_parse_base_url_rejects_garbage() {
        assert!(matches!(
            parse_base_url(Platform::Reddit, "not a url"),
            Err(ClientError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            parse_base_url(Platform::Reddit, "ftp://example.com"),
            Err(ClientError::InvalidBaseUrl { .. })
        ));
    }
}
