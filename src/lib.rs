//! snam-clients - configured API client handles
//!
//! Builds handles to the Reddit API and the YouTube Data API from injected
//! credentials. Construction never touches the network; callers that want
//! to fail fast call [`PlatformClient::verify`] on the returned handle.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): config models, credential types, the
//!   client port and the error taxonomy
//! - **Adapters** (`adapters`): one factory and handle per platform
//! - **Infrastructure Layer** (`infrastructure`): config loading and logging
//! - **CLI Layer** (`cli`): command-line interface and process exit policy
//!
//! # Example
//!
//! ```no_run
//! use snam_clients::{video_client, ConfigLoader, PlatformClient};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = ConfigLoader::load()?;
//! let youtube = video_client(&config.youtube, &config.http)?;
//! youtube.verify().await?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use adapters::{
    social_client, video_client, RedditClient, RedditCredentials, YoutubeClient,
    YoutubeCredentials,
};
pub use domain::models::{Config, HttpConfig, Platform, RedditConfig, Secret, YoutubeConfig};
pub use domain::ports::PlatformClient;
pub use domain::{ClientError, ClientResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
