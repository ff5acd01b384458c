use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::secret::{optional_scalar_string, Secret};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Reddit API client settings and credentials
    #[serde(default)]
    pub reddit: RedditConfig,

    /// YouTube Data API client settings and credentials
    #[serde(default)]
    pub youtube: YoutubeConfig,

    /// Shared HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Reddit client configuration
///
/// Credentials have no defaults; they must come from a config file or the
/// environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RedditConfig {
    /// OAuth application identifier
    #[serde(default, deserialize_with = "optional_scalar_string")]
    pub client_id: Option<String>,

    /// OAuth application secret
    #[serde(default)]
    pub client_secret: Option<Secret>,

    /// Descriptive User-Agent label sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Base URL for the Reddit API
    #[serde(default = "default_reddit_base_url")]
    pub base_url: String,
}

fn default_user_agent() -> String {
    "client for SNAM2024".to_string()
}

fn default_reddit_base_url() -> String {
    "https://www.reddit.com".to_string()
}

impl Default for RedditConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            user_agent: default_user_agent(),
            base_url: default_reddit_base_url(),
        }
    }
}

/// YouTube Data API client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct YoutubeConfig {
    /// API access key
    #[serde(default)]
    pub api_key: Option<Secret>,

    /// Discovery service name
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// API version
    #[serde(default = "default_version")]
    pub version: String,

    /// Base URL for Google APIs
    #[serde(default = "default_youtube_base_url")]
    pub base_url: String,
}

fn default_service_name() -> String {
    "youtube".to_string()
}

fn default_version() -> String {
    "v3".to_string()
}

fn default_youtube_base_url() -> String {
    "https://www.googleapis.com".to_string()
}

impl Default for YoutubeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            service_name: default_service_name(),
            version: default_version(),
            base_url: default_youtube_base_url(),
        }
    }
}

/// HTTP client settings shared by both platforms
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling JSON log files (stderr only when unset)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Log file rotation policy
    #[serde(default)]
    pub rotation: RotationPolicy,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: RotationPolicy::default(),
        }
    }
}

impl LoggingConfig {
    /// Parsed output format, if `format` holds a known value
    pub fn log_format(&self) -> Option<LogFormat> {
        match self.format.to_lowercase().as_str() {
            "json" => Some(LogFormat::Json),
            "pretty" => Some(LogFormat::Pretty),
            _ => None,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Human-readable multi-line output
    Pretty,
}

/// Log file rotation policy
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RotationPolicy {
    /// New file every day
    #[default]
    Daily,
    /// New file every hour
    Hourly,
    /// Single file
    Never,
}
