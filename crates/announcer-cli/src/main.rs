//! skydns-pod-announcer - announce your pod IP to SkyDNS.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    announcer_cli::run().await
}
