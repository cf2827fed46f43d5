//! CLI for the linkres third-party link resolver.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use linkres_core::config;
use std::path::PathBuf;

use commands::{run_list, run_resolve};

/// Top-level CLI for the linkres link resolver.
#[derive(Debug, Parser)]
#[command(name = "linkres")]
#[command(about = "Resolve third-party download links from a static manifest", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve the download link selected by THIRD_PARTY_NAME,
    /// THIRD_PARTY_VERSION and ARCH.
    Resolve {
        /// Path to the manifest JSON (overrides the configured default).
        #[arg(long, value_name = "PATH")]
        manifest: Option<PathBuf>,
    },

    /// List every record in the manifest.
    List {
        /// Path to the manifest JSON (overrides the configured default).
        #[arg(long, value_name = "PATH")]
        manifest: Option<PathBuf>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Resolve { manifest } => run_resolve(manifest.as_deref(), &cfg)?,
            CliCommand::List { manifest } => run_list(manifest.as_deref(), &cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
