//! # announcer-cli
//!
//! Command-line interface for the SkyDNS pod announcer.
//!
//! Searches for the first non-loopback interface address and registers it
//! under a SkyDNS service-discovery key in etcd. One registration attempt
//! per run; any failure terminates the process with a non-zero exit.

pub mod cli;
pub mod config;

pub use cli::run;
