//! Implementation of the `snam-clients check` command.

use anyhow::Result;
use clap::Args;
use comfy_table::Cell;
use serde::Serialize;
use tracing::debug;

use crate::adapters::{social_client, video_client};
use crate::cli::output::{base_table, output, CommandOutput};
use crate::domain::models::{Config, Platform, PlatformSelection};
use crate::domain::ports::PlatformClient;

/// Arguments for `check`
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Which platform clients to build
    #[arg(short, long, value_enum, default_value_t = PlatformSelection::All)]
    pub platform: PlatformSelection,

    /// Make one authenticated call per client to confirm the credentials
    #[arg(long)]
    pub verify: bool,
}

/// Outcome for one platform handle
#[derive(Debug, Serialize)]
pub struct ClientReport {
    /// Platform the handle talks to
    pub platform: Platform,
    /// Identifier of the freshly built handle
    pub handle_id: String,
    /// Base endpoint requests go to
    pub endpoint: String,
    /// `None` when verification was not requested
    pub verified: Option<bool>,
    /// Verification failure, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Output of `check`
#[derive(Debug, Serialize)]
pub struct CheckOutput {
    /// One report per selected platform
    pub clients: Vec<ClientReport>,
}

impl CheckOutput {
    /// Platforms whose verification call failed
    pub fn failed(&self) -> Vec<Platform> {
        self.clients
            .iter()
            .filter(|c| c.verified == Some(false))
            .map(|c| c.platform)
            .collect()
    }
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        let mut table = base_table(&["Platform", "Handle", "Endpoint", "Status"]);
        for client in &self.clients {
            let status = match (client.verified, &client.error) {
                (None, _) => "built".to_string(),
                (Some(true), _) => "verified".to_string(),
                (Some(false), Some(error)) => format!("failed: {error}"),
                (Some(false), None) => "failed".to_string(),
            };
            table.add_row(vec![
                Cell::new(client.platform),
                Cell::new(&client.handle_id[..8]),
                Cell::new(&client.endpoint),
                Cell::new(status),
            ]);
        }
        table.to_string()
    }
}

/// Build the handle for one platform.
///
/// Factory errors, including a missing credential, are returned as-is.
pub fn build_client(platform: Platform, config: &Config) -> Result<Box<dyn PlatformClient>> {
    let client: Box<dyn PlatformClient> = match platform {
        Platform::Reddit => Box::new(social_client(&config.reddit, &config.http)?),
        Platform::Youtube => Box::new(video_client(&config.youtube, &config.http)?),
    };
    Ok(client)
}

/// Build (and optionally verify) the selected clients
pub async fn run(args: &CheckArgs, config: &Config) -> Result<CheckOutput> {
    let clients = args
        .platform
        .platforms()
        .into_iter()
        .map(|platform| build_client(platform, config))
        .collect::<Result<Vec<_>>>()?;

    let mut reports = Vec::with_capacity(clients.len());
    for client in clients {
        let (verified, error) = if args.verify {
            match client.verify().await {
                Ok(()) => (Some(true), None),
                Err(err) => {
                    debug!(platform = %client.platform(), error = %err, "verification failed");
                    (Some(false), Some(err.to_string()))
                }
            }
        } else {
            (None, None)
        };

        reports.push(ClientReport {
            platform: client.platform(),
            handle_id: client.handle_id().to_string(),
            endpoint: client.endpoint(),
            verified,
            error,
        });
    }

    Ok(CheckOutput { clients: reports })
}

/// Run `check`, printing the report and failing if any verification failed
pub async fn execute(args: CheckArgs, config: &Config, json_mode: bool) -> Result<()> {
    let result = run(&args, config).await?;
    output(&result, json_mode);

    let failed = result.failed();
    if !failed.is_empty() {
        let names: Vec<String> = failed.iter().map(ToString::to_string).collect();
        anyhow::bail!("Credential verification failed for: {}", names.join(", "));
    }

    debug!(clients = result.clients.len(), verify = args.verify, "check complete");
    Ok(())
}
