//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands::check::CheckArgs;

#[derive(Parser, Debug)]
#[command(name = "snam-clients")]
#[command(about = "Build and check Reddit and YouTube API client handles", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Read configuration from this file instead of snam.yaml / snam.local.yaml
    #[arg(short, long, global = true, env = "SNAM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build client handles and optionally verify their credentials
    Check(CheckArgs),

    /// Print the effective configuration with secrets redacted
    Config,
}
