//! Reddit API client handle.
//!
//! Holds an HTTP client preconfigured with the application's User-Agent
//! label and identifier/secret pair. Token exchange, refresh and rate
//! limiting are left to the caller; [`RedditClient::verify`] only performs
//! a single client-credentials exchange to prove the pair is accepted.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Deserialize;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::adapters::{
    build_http_client, network_error, parse_base_url, read_body, required_secret,
    required_value, scrubbed,
};
use crate::domain::errors::{ClientError, ClientResult};
use crate::domain::models::{HttpConfig, Platform, RedditConfig, Secret};
use crate::domain::ports::PlatformClient;

/// Application-only OAuth token endpoint, relative to the base URL
const ACCESS_TOKEN_PATH: &str = "/api/v1/access_token";

/// Identifier/secret pair plus the descriptive User-Agent label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedditCredentials {
    client_id: String,
    client_secret: Secret,
    user_agent: String,
}

impl RedditCredentials {
    /// Build a credential bundle from explicit values
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<Secret>,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            user_agent: user_agent.into(),
        }
    }

    /// Extract the credential bundle from configuration.
    ///
    /// Absent or blank values yield [`ClientError::MissingCredential`].
    pub fn from_config(config: &RedditConfig) -> ClientResult<Self> {
        let client_id =
            required_value(Platform::Reddit, "client_id", config.client_id.as_deref())?;
        let client_secret = required_secret(
            Platform::Reddit,
            "client_secret",
            config.client_secret.as_ref(),
        )?;
        let user_agent =
            required_value(Platform::Reddit, "user_agent", Some(config.user_agent.as_str()))?;

        Ok(Self {
            client_id,
            client_secret,
            user_agent,
        })
    }

    /// OAuth application identifier
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// OAuth application secret
    pub const fn client_secret(&self) -> &Secret {
        &self.client_secret
    }

    /// User-Agent label
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

/// Reddit reports `error` as a string or as a bare status number
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    error: Option<serde_json::Value>,
}

/// Handle to the Reddit API
#[derive(Debug, Clone)]
pub struct RedditClient {
    http: Client,
    credentials: RedditCredentials,
    base_url: String,
    handle_id: Uuid,
}

/// Build a Reddit client handle from injected configuration.
///
/// Performs no network I/O. Fails with [`ClientError::MissingCredential`]
/// when the identifier, secret or User-Agent label is absent; other
/// failures (bad base URL, HTTP client build) use their own variants.
pub fn social_client(config: &RedditConfig, http: &HttpConfig) -> ClientResult<RedditClient> {
    let credentials = RedditCredentials::from_config(config)?;
    RedditClient::new(credentials, &config.base_url, http)
}

impl RedditClient {
    /// Create a handle from an explicit credential bundle
    pub fn new(
        credentials: RedditCredentials,
        base_url: &str,
        http: &HttpConfig,
    ) -> ClientResult<Self> {
        let base_url = parse_base_url(Platform::Reddit, base_url)?;
        let http = build_http_client(http, &credentials.user_agent)?;
        let handle_id = Uuid::new_v4();

        debug!(
            %handle_id,
            base_url = %base_url,
            client_id = %credentials.client_id,
            "created reddit client"
        );

        Ok(Self {
            http,
            credentials,
            base_url,
            handle_id,
        })
    }

    /// Credential bundle recorded on this handle
    pub const fn credentials(&self) -> &RedditCredentials {
        &self.credentials
    }

    /// Base URL requests are issued against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Underlying HTTP client
    pub const fn http(&self) -> &Client {
        &self.http
    }

    /// Start a request to `path` carrying the application's basic auth.
    ///
    /// The User-Agent label is attached by the underlying client.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        self.http.request(method, url).basic_auth(
            &self.credentials.client_id,
            Some(self.credentials.client_secret.expose()),
        )
    }
}

#[async_trait]
impl PlatformClient for RedditClient {
    fn platform(&self) -> Platform {
        Platform::Reddit
    }

    fn handle_id(&self) -> Uuid {
        self.handle_id
    }

    fn endpoint(&self) -> String {
        self.base_url.clone()
    }

    #[instrument(skip_all, fields(platform = "reddit"))]
    async fn verify(&self) -> ClientResult<()> {
        let response = self
            .request(Method::POST, ACCESS_TOKEN_PATH)
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| network_error(Platform::Reddit, e))?;

        let status = response.status();
        let body = read_body(Platform::Reddit, response).await?;

        if status.is_success() {
            return match serde_json::from_str::<TokenResponse>(&body) {
                Ok(TokenResponse {
                    access_token: Some(_),
                    error: None,
                }) => {
                    debug!(handle_id = %self.handle_id, "reddit credentials accepted");
                    Ok(())
                }
                Ok(TokenResponse { error: Some(_), .. }) => {
                    warn!(
                        handle_id = %self.handle_id,
                        status = status.as_u16(),
                        "reddit rejected credentials"
                    );
                    Err(ClientError::InvalidCredentials {
                        platform: Platform::Reddit,
                        status: status.as_u16(),
                        body: scrubbed(&body, &self.credentials.client_secret),
                    })
                }
                _ => Err(ClientError::UnexpectedStatus {
                    platform: Platform::Reddit,
                    status: status.as_u16(),
                    body: scrubbed(&body, &self.credentials.client_secret),
                }),
            };
        }

        if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            warn!(
                handle_id = %self.handle_id,
                status = status.as_u16(),
                "reddit rejected credentials"
            );
            return Err(ClientError::InvalidCredentials {
                platform: Platform::Reddit,
                status: status.as_u16(),
                body: scrubbed(&body, &self.credentials.client_secret),
            });
        }

        Err(ClientError::UnexpectedStatus {
            platform: Platform::Reddit,
            status: status.as_u16(),
            body: scrubbed(&body, &self.credentials.client_secret),
        })
    }
}
