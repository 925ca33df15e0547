//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// Announce your pod IP to SkyDNS.
///
/// Searches for the first non-loopback interface address and announces it to
/// the configured etcd endpoint. All options may also come from environment
/// variables or the config file; flags win over both.
#[derive(Parser, Debug)]
#[command(name = "skydns-pod-announcer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Hostname to announce (default: the OS hostname)
    #[arg(long, env = "ANNOUNCER_HOSTNAME")]
    pub hostname: Option<String>,

    /// etcd endpoint of the SkyDNS registry
    #[arg(long, env = "ANNOUNCER_ETCD")]
    pub etcd: Option<String>,

    /// IP to announce (default: first non-loopback interface address)
    #[arg(long, env = "ANNOUNCER_IP")]
    pub ip: Option<String>,

    /// Config file (default: $HOME/.skydns-pod-announcer.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long)]
    pub verbose: bool,
}
