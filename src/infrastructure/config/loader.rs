use std::path::Path;

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::Config;
use crate::infrastructure::logging::logger::parse_log_level;

/// Project config file, read from the working directory
pub const CONFIG_FILE: &str = "snam.yaml";

/// Optional local overrides, read from the working directory
pub const LOCAL_CONFIG_FILE: &str = "snam.local.yaml";

/// Prefix for nested environment overrides (`SNAM_HTTP__TIMEOUT_SECS`)
pub const ENV_PREFIX: &str = "SNAM_";

/// Conventional credential variables and the config keys they map to
const CREDENTIAL_ENV_VARS: [(&str, &str); 4] = [
    ("REDDIT_CLIENT_ID", "reddit.client_id"),
    ("REDDIT_CLIENT_SECRET", "reddit.client_secret"),
    ("REDDIT_USER_AGENT", "reddit.user_agent"),
    ("YOUTUBE_API_KEY", "youtube.api_key"),
];

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `logging.level` is not a known level
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// `logging.format` is neither json nor pretty
    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    /// `http.timeout_secs` is zero
    #[error("Invalid timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),

    /// A platform's `base_url` is blank
    #[error("{0} base_url cannot be empty")]
    EmptyBaseUrl(&'static str),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `snam.yaml` in the working directory
    /// 3. `snam.local.yaml` (local overrides, optional)
    /// 4. `REDDIT_CLIENT_ID`, `REDDIT_CLIENT_SECRET`, `REDDIT_USER_AGENT`,
    ///    `YOUTUBE_API_KEY`
    /// 5. `SNAM_*` environment variables, nested with `__`
    ///
    /// Credentials are never required here; a missing credential is
    /// reported by the client factory that needs it.
    pub fn load() -> Result<Config> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(CONFIG_FILE))
            .merge(Yaml::file(LOCAL_CONFIG_FILE));

        Self::finish(figment).context("Failed to extract configuration from figment")
    }

    /// Load configuration from a specific file, still honoring environment
    /// overrides
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path));

        Self::finish(figment).context(format!("Failed to load config from {}", path.display()))
    }

    fn finish(figment: Figment) -> Result<Config> {
        let config: Config = credential_env(figment)
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if parse_log_level(&config.logging.level).is_err() {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        if config.logging.log_format().is_none() {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        if config.http.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.http.timeout_secs));
        }

        if config.reddit.base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl("reddit"));
        }

        if config.youtube.base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl("youtube"));
        }

        Ok(())
    }
}

/// Merge the conventional credential variables onto their config keys.
///
/// Values are taken verbatim, so `007` stays `007` instead of being parsed
/// as a number.
fn credential_env(figment: Figment) -> Figment {
    CREDENTIAL_ENV_VARS
        .iter()
        .fold(figment, |figment, (name, key)| match std::env::var(name) {
            Ok(value) => figment.merge(Serialized::default(key, value)),
            Err(_) => figment,
        })
}
