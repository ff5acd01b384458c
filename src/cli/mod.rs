//! Command-line interface
//!
//! The CLI is the only place that decides process termination. Factories
//! and commands return errors; [`missing_credential_exit`] turns the one
//! documented failure into a single stderr line and exit status 1.

pub mod commands;
pub mod output;
pub mod types;

use std::io::Write;

use crate::domain::errors::ClientError;

pub use types::{Cli, Commands};

/// Exit status used when a client factory reports a missing credential
pub const EXIT_MISSING_CREDENTIAL: u8 = 1;

/// Handle the missing-credential failure path.
///
/// When `err` wraps [`ClientError::MissingCredential`], writes exactly one
/// diagnostic line to `stderr` and returns the exit status to use. Any other
/// error yields `None` and must be propagated by the caller.
pub fn missing_credential_exit(err: &anyhow::Error, stderr: &mut impl Write) -> Option<u8> {
    let client_err = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<ClientError>())?;

    if !client_err.is_missing_credential() {
        return None;
    }

    let _ = writeln!(stderr, "{client_err}");
    Some(EXIT_MISSING_CREDENTIAL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Platform;
    use anyhow::Context;

    #[test]
    fn test_missing_credential_writes_one_line() {
        let err = anyhow::Error::new(ClientError::MissingCredential {
            platform: Platform::Youtube,
            field: "api_key",
        });
        let mut stderr = Vec::new();

        let code = missing_credential_exit(&err, &mut stderr);

        assert_eq!(code, Some(1));
        let text = String::from_utf8(stderr).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert_eq!(text, "API key is invalid. (youtube.api_key is not set)\n");
    }

    #[test]
    fn test_missing_credential_found_through_context() {
        let err = Err::<(), _>(ClientError::MissingCredential {
            platform: Platform::Reddit,
            field: "client_id",
        })
        .context("building reddit client")
        .unwrap_err();
        let mut stderr = Vec::new();

        assert_eq!(missing_credential_exit(&err, &mut stderr), Some(1));
        assert!(String::from_utf8(stderr)
            .unwrap()
            .starts_with("Key or secret token are invalid."));
    }

    #[test]
    fn test_other_client_errors_are_not_absorbed() {
        let err = anyhow::Error::new(ClientError::InvalidBaseUrl {
            platform: Platform::Reddit,
            url: "nope".to_string(),
            reason: "relative URL without a base".to_string(),
        });
        let mut stderr = Vec::new();

        assert_eq!(missing_credential_exit(&err, &mut stderr), None);
        assert!(stderr.is_empty());
    }

    #[test]
    fn test_unrelated_errors_are_not_absorbed() {
        let err = anyhow::anyhow!("disk on fire");
        let mut stderr = Vec::new();

        assert_eq!(missing_credential_exit(&err, &mut stderr), None);
        assert!(stderr.is_empty());
    }
}
