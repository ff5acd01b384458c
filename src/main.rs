//! snam-clients CLI entry point.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use snam_clients::cli::commands::{check, config};
use snam_clients::cli::{missing_credential_exit, Cli, Commands};
use snam_clients::infrastructure::config::ConfigLoader;
use snam_clients::infrastructure::logging::LoggerImpl;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    let _logger = LoggerImpl::init(&settings.logging)?;

    let result = match cli.command {
        Commands::Check(args) => check::execute(args, &settings, cli.json).await,
        Commands::Config => {
            config::execute(&settings, cli.json);
            Ok(())
        }
    };

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => match missing_credential_exit(&err, &mut std::io::stderr()) {
            Some(code) => Ok(ExitCode::from(code)),
            None => Err(err),
        },
    }
}
