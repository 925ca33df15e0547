//! Identity resolution and the registry HTTP client for the SkyDNS pod
//! announcer.
//!
//! The [`identity`] module decides what to announce (hostname, IP); the
//! [`RegistryClient`] performs the single registration PUT.

#![doc(html_root_url = "https://docs.rs/announcer-client/0.1.0")]

mod client;
pub mod identity;

pub use announcer_core::{AnnounceError, AnnounceTarget, Result};
pub use client::RegistryClient;
