//! Domain models

pub mod config;
pub mod platform;
pub mod secret;

pub use config::{
    Config, HttpConfig, LogFormat, LoggingConfig, RedditConfig, RotationPolicy, YoutubeConfig,
};
pub use platform::{Platform, PlatformSelection};
pub use secret::Secret;
