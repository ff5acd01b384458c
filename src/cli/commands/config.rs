//! Implementation of the `snam-clients config` command.

use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;

/// Effective configuration; secrets serialize as `[REDACTED]`
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ConfigOutput<'a> {
    /// Loaded configuration
    pub config: &'a Config,
}

impl CommandOutput for ConfigOutput<'_> {
    fn to_human(&self) -> String {
        serde_yaml::to_string(self.config).unwrap_or_default()
    }
}

/// Print the effective configuration
pub fn execute(config: &Config, json_mode: bool) {
    output(&ConfigOutput { config }, json_mode);
}
