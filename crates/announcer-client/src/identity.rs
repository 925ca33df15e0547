//! Identity resolution: which hostname and IP to announce.
//!
//! Overrides win unconditionally and skip the OS entirely. Without an
//! override the hostname comes from the OS and the IP from the first
//! interface address that is not the loopback literal, in whatever order the
//! OS enumerates addresses.

use announcer_core::{AnnounceConfig, AnnounceError, AnnounceTarget, NetworkAddress, Result};
use tracing::info;

/// The one loopback form the address filter knows about.
///
/// This is a literal string comparison, not a semantic loopback check:
/// `::1/128`, `127.0.0.2/8` and link-local addresses all pass the filter.
/// Dual-stack hosts may depend on that.
const LOOPBACK_LITERAL: &str = "127.0.0.1/8";

/// Resolve the full announce target from an explicit configuration.
pub fn resolve(config: &AnnounceConfig) -> Result<AnnounceTarget> {
    let hostname = resolve_hostname(&config.hostname)?;
    let ip = resolve_ip(&config.ip)?;

    Ok(AnnounceTarget {
        hostname,
        ip,
        registry_address: config.etcd.clone(),
    })
}

/// Hostname to announce: a non-empty override verbatim, else the OS
/// hostname.
pub fn resolve_hostname(hostname_override: &str) -> Result<String> {
    if !hostname_override.is_empty() {
        return Ok(hostname_override.to_string());
    }

    let hostname = hostname::get()
        .map_err(|e| AnnounceError::HostLookup(e.to_string()))?
        .to_string_lossy()
        .into_owned();
    info!(hostname = %hostname, "no hostname given, using OS hostname");

    Ok(hostname)
}

/// IP to announce: a non-empty override verbatim (unvalidated), else the
/// stripped form of the first usable interface address.
pub fn resolve_ip(ip_override: &str) -> Result<String> {
    if !ip_override.is_empty() {
        return Ok(ip_override.to_string());
    }

    let ip = first_usable_address(enumerate_addresses()?)?;
    info!(ip = %ip, "no ip given, using first non-loopback interface address");

    Ok(ip)
}

/// All local interface addresses in OS order, rendered to the textual
/// `address/prefixlen` form.
fn enumerate_addresses() -> Result<Vec<NetworkAddress>> {
    let interfaces =
        if_addrs::get_if_addrs().map_err(|e| AnnounceError::IpEnumeration(e.to_string()))?;

    Ok(interfaces
        .into_iter()
        .map(|iface| {
            let prefix = prefix_len(&iface.addr);
            NetworkAddress::new(format!("{}/{prefix}", iface.ip()))
        })
        .collect())
}

/// Prefix length recovered from the interface netmask.
fn prefix_len(addr: &if_addrs::IfAddr) -> u32 {
    match addr {
        if_addrs::IfAddr::V4(v4) => u32::from(v4.netmask).count_ones(),
        if_addrs::IfAddr::V6(v6) => u128::from(v6.netmask).count_ones(),
    }
}

/// First entry whose full textual form is not exactly the loopback literal,
/// stripped of its CIDR suffix.
fn first_usable_address<I>(addrs: I) -> Result<String>
where
    I: IntoIterator<Item = NetworkAddress>,
{
    addrs
        .into_iter()
        .find(|addr| addr.as_str() != LOOPBACK_LITERAL)
        .map(|addr| addr.address().to_string())
        .ok_or(AnnounceError::NoUsableAddress)
}
