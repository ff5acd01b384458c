//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment:
//! - YAML file loading
//! - Conventional credential environment variables
//! - `SNAM_*` environment overrides
//! - Configuration validation

pub mod loader;

pub use loader::{ConfigError, ConfigLoader};
