//! Configuration file handling.

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// On-disk configuration, the lowest-precedence source before the built-in
/// defaults. Every key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    /// Hostname to announce.
    pub hostname: Option<String>,

    /// etcd endpoint of the SkyDNS registry.
    pub etcd: Option<String>,

    /// IP to announce.
    pub ip: Option<String>,
}

impl FileConfig {
    /// Default config file path: `$HOME/.skydns-pod-announcer.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".skydns-pod-announcer.toml"))
    }

    /// Load configuration.
    ///
    /// A missing file at the default path is not an error; an explicitly
    /// given path that cannot be read or parsed is.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::read(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::read(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        tracing::info!(path = %path.display(), "using config file");

        Ok(config)
    }
}
