//! YouTube Data API client handle.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::adapters::{
    build_http_client, network_error, parse_base_url, read_body, required_secret, scrubbed,
};
use crate::domain::errors::{ClientError, ClientResult};
use crate::domain::models::{HttpConfig, Platform, Secret, YoutubeConfig};
use crate::domain::ports::PlatformClient;

/// Cheapest authenticated resource; costs one quota unit
const VERIFY_RESOURCE: &str = "i18nLanguages";

/// Markers Google uses in 400 bodies for a rejected key
const INVALID_KEY_MARKERS: [&str; 3] = ["API_KEY_INVALID", "keyInvalid", "API key not valid"];

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Access key for the YouTube Data API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YoutubeCredentials {
    api_key: Secret,
}

impl YoutubeCredentials {
    /// Wrap an explicit access key
    pub fn new(api_key: impl Into<Secret>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// Extract the access key from configuration
    pub fn from_config(config: &YoutubeConfig) -> ClientResult<Self> {
        let api_key = required_secret(Platform::Youtube, "api_key", config.api_key.as_ref())?;
        Ok(Self { api_key })
    }

    /// The access key
    pub const fn api_key(&self) -> &Secret {
        &self.api_key
    }
}

/// Handle to the YouTube Data API
#[derive(Debug, Clone)]
pub struct YoutubeClient {
    http: Client,
    credentials: YoutubeCredentials,
    service_name: String,
    version: String,
    base_url: String,
    handle_id: Uuid,
}

/// Build a YouTube Data API handle from injected configuration.
///
/// Performs no network I/O; an unusable key is only detected by
/// [`PlatformClient::verify`] or the first real request.
pub fn video_client(config: &YoutubeConfig, http: &HttpConfig) -> ClientResult<YoutubeClient> {
    let credentials = YoutubeCredentials::from_config(config)?;
    YoutubeClient::new(
        credentials,
        &config.service_name,
        &config.version,
        &config.base_url,
        http,
    )
}

/// Service name and version become URL path segments
fn path_segment(field: &'static str, value: &str) -> ClientResult<String> {
    let value = value.trim();
    if value.is_empty() || value.contains('/') {
        return Err(ClientError::InvalidSetting {
            platform: Platform::Youtube,
            field,
            reason: format!("'{value}' is not a single path segment"),
        });
    }
    Ok(value.to_string())
}

impl YoutubeClient {
    /// Create a handle from an explicit access key and service identifiers
    pub fn new(
        credentials: YoutubeCredentials,
        service_name: &str,
        version: &str,
        base_url: &str,
        http: &HttpConfig,
    ) -> ClientResult<Self> {
        let service_name = path_segment("service_name", service_name)?;
        let version = path_segment("version", version)?;
        let base_url = parse_base_url(Platform::Youtube, base_url)?;
        let http = build_http_client(http, USER_AGENT)?;
        let handle_id = Uuid::new_v4();

        debug!(
            %handle_id,
            service = %service_name,
            version = %version,
            base_url = %base_url,
            "created youtube client"
        );

        Ok(Self {
            http,
            credentials,
            service_name,
            version,
            base_url,
            handle_id,
        })
    }

    /// Credential recorded on this handle
    pub const fn credentials(&self) -> &YoutubeCredentials {
        &self.credentials
    }

    /// Service name (`youtube`)
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// API version (`v3`)
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Base URL of the Google APIs host
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Underlying HTTP client
    pub const fn http(&self) -> &Client {
        &self.http
    }

    /// Root of the versioned service, e.g. `https://www.googleapis.com/youtube/v3`
    pub fn api_root(&self) -> String {
        format!("{}/{}/{}", self.base_url, self.service_name, self.version)
    }

    /// URL of a resource collection under the versioned service
    pub fn resource_url(&self, resource: &str) -> String {
        format!("{}/{}", self.api_root(), resource.trim_start_matches('/'))
    }

    /// Start a request to `resource` with the access key attached
    pub fn request(&self, method: Method, resource: &str) -> RequestBuilder {
        self.http
            .request(method, self.resource_url(resource))
            .query(&[("key", self.credentials.api_key.expose())])
    }
}

#[async_trait]
impl PlatformClient for YoutubeClient {
    fn platform(&self) -> Platform {
        Platform::Youtube
    }

    fn handle_id(&self) -> Uuid {
        self.handle_id
    }

    fn endpoint(&self) -> String {
        self.api_root()
    }

    #[instrument(skip_all, fields(platform = "youtube"))]
    async fn verify(&self) -> ClientResult<()> {
        let response = self
            .request(Method::GET, VERIFY_RESOURCE)
            .query(&[("part", "snippet")])
            .send()
            .await
            .map_err(|e| network_error(Platform::Youtube, e))?;

        let status = response.status();
        let body = read_body(Platform::Youtube, response).await?;

        if status.is_success() {
            debug!(handle_id = %self.handle_id, "youtube access key accepted");
            return Ok(());
        }

        let key_rejected = matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
            || (status == StatusCode::BAD_REQUEST
                && INVALID_KEY_MARKERS.iter().any(|marker| body.contains(marker)));

        if key_rejected {
            warn!(
                handle_id = %self.handle_id,
                status = status.as_u16(),
                "youtube rejected access key"
            );
            return Err(ClientError::InvalidCredentials {
                platform: Platform::Youtube,
                status: status.as_u16(),
                body: scrubbed(&body, &self.credentials.api_key),
            });
        }

        Err(ClientError::UnexpectedStatus {
            platform: Platform::Youtube,
            status: status.as_u16(),
            body: scrubbed(&body, &self.credentials.api_key),
        })
    }
}
