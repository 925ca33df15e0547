//! CLI entry point: argument parsing, config merge, and the announce run.

pub mod args;

use anyhow::Result;
use announcer_client::{identity, RegistryClient};
use announcer_core::AnnounceConfig;
use args::Cli;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::FileConfig;

/// Run the CLI application.
///
/// Either the single registration attempt succeeds, or the first error
/// propagates out and the process exits non-zero.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let file = FileConfig::load(cli.config.as_deref())?;
    let config = merge(&cli, &file);

    let target = identity::resolve(&config)?;
    info!(
        hostname = %target.hostname,
        ip = %target.ip,
        registry = %target.registry_address,
        "announcing"
    );

    let client = RegistryClient::new(&target.registry_address)?;
    client.announce(&target.ip, &target.hostname).await?;
    info!("announcement accepted");

    Ok(())
}

/// Initialize the tracing subscriber once at startup.
///
/// `RUST_LOG` wins if set; otherwise `--verbose` lowers the default level
/// from info to debug.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Merge the configuration sources: flag/env (handled by clap) > config
/// file > built-in default.
fn merge(cli: &Cli, file: &FileConfig) -> AnnounceConfig {
    let defaults = AnnounceConfig::default();

    AnnounceConfig {
        hostname: cli
            .hostname
            .clone()
            .or_else(|| file.hostname.clone())
            .unwrap_or(defaults.hostname),
        etcd: cli
            .etcd
            .clone()
            .or_else(|| file.etcd.clone())
            .unwrap_or(defaults.etcd),
        ip: cli
            .ip
            .clone()
            .or_else(|| file.ip.clone())
            .unwrap_or(defaults.ip),
    }
}
