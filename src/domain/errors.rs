//! Errors raised while building or verifying a platform client.

use thiserror::Error;

use super::models::Platform;

/// Diagnostic printed when a platform's credentials are not configured.
fn missing_credential_message(platform: Platform, field: &str) -> String {
    let summary = match platform {
        Platform::Reddit => "Key or secret token are invalid.",
        Platform::Youtube => "API key is invalid.",
    };
    format!("{summary} ({platform}.{field} is not set)")
}

/// Errors that can occur when constructing or verifying a client handle.
///
/// Only [`ClientError::MissingCredential`] is treated specially by the CLI;
/// every other variant is propagated to the caller unchanged.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A required credential is absent or blank in the configuration
    #[error("{}", missing_credential_message(*.platform, .field))]
    MissingCredential {
        /// Platform whose credentials are incomplete
        platform: Platform,
        /// Configuration field that was missing
        field: &'static str,
    },

    /// A non-secret setting has an unusable value
    #[error("Invalid {platform} setting {field}: {reason}")]
    InvalidSetting {
        /// Platform the setting belongs to
        platform: Platform,
        /// Configuration field name
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// The configured base URL cannot be parsed
    #[error("Invalid {platform} base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// Platform the URL belongs to
        platform: Platform,
        /// The rejected URL
        url: String,
        /// Parser diagnostic
        reason: String,
    },

    /// The underlying HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// A request could not be sent or its response could not be read
    #[error("Request to {platform} failed: {source}")]
    Network {
        /// Platform that was being contacted
        platform: Platform,
        /// Transport error, stripped of its URL
        #[source]
        source: reqwest::Error,
    },

    /// The platform rejected the configured credentials
    #[error("{platform} rejected the configured credentials (HTTP {status}): {body}")]
    InvalidCredentials {
        /// Platform that rejected the credentials
        platform: Platform,
        /// HTTP status returned
        status: u16,
        /// Scrubbed response body
        body: String,
    },

    /// The platform answered with a status the client does not interpret
    #[error("{platform} returned unexpected HTTP {status}: {body}")]
    UnexpectedStatus {
        /// Platform that answered
        platform: Platform,
        /// HTTP status returned
        status: u16,
        /// Scrubbed response body
        body: String,
    },
}

impl ClientError {
    /// Returns true for the documented missing-credential failure
    pub const fn is_missing_credential(&self) -> bool {
        matches!(self, Self::MissingCredential { .. })
    }

    /// Platform associated with the error, if any
    pub const fn platform(&self) -> Option<Platform> {
        match self {
            Self::MissingCredential { platform, .. }
            | Self::InvalidSetting { platform, .. }
            | Self::InvalidBaseUrl { platform, .. }
            | Self::Network { platform, .. }
            | Self::InvalidCredentials { platform, .. }
            | Self::UnexpectedStatus { platform, .. } => Some(*platform),
            Self::Build(_) => None,
        }
    }
}

/// Result alias for client construction and verification
pub type ClientResult<T> = Result<T, ClientError>;
