//! Value types shared across the announcer crates.

use serde::{Deserialize, Serialize};

/// Default registry endpoint, matching the legacy deployment layout.
pub const DEFAULT_REGISTRY_ADDRESS: &str = "http://etcd:2379";

/// Explicit per-invocation configuration.
///
/// An empty `hostname` or `ip` means "derive it from the OS". The struct is
/// passed by value into the resolver entry points; there is no ambient
/// configuration state anywhere in the crates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnounceConfig {
    /// Hostname override; empty selects the OS hostname.
    pub hostname: String,

    /// Base address of the registry's REST endpoint.
    pub etcd: String,

    /// IP override; empty selects the first non-loopback interface address.
    pub ip: String,
}

impl Default for AnnounceConfig {
    fn default() -> Self {
        Self {
            hostname: String::new(),
            etcd: String::from(DEFAULT_REGISTRY_ADDRESS),
            ip: String::new(),
        }
    }
}

/// What gets announced: a resolved identity plus where to announce it.
///
/// Plain value type with no identity beyond equality; it lives for the
/// duration of a single invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnounceTarget {
    /// DNS name the record is stored under.
    pub hostname: String,

    /// Textual IPv4/IPv6 address without a subnet suffix.
    pub ip: String,

    /// Base URL of the registry's REST endpoint.
    pub registry_address: String,
}

/// Interface address in the textual `address/prefixlen` form the OS reports,
/// e.g. `127.0.0.1/8` or `fe80::1/64`.
///
/// Consumed only during IP resolution and discarded once the prefix is
/// stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkAddress(String);

impl NetworkAddress {
    /// Wrap a textual address-with-prefix.
    pub fn new(addr: impl Into<String>) -> Self {
        Self(addr.into())
    }

    /// The full `address/prefixlen` form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The address portion with the CIDR suffix stripped.
    #[must_use]
    pub fn address(&self) -> &str {
        match self.0.split_once('/') {
            Some((address, _)) => address,
            None => &self.0,
        }
    }
}

impl std::fmt::Display for NetworkAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
