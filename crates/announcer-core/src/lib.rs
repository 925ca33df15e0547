//! Core types for the SkyDNS pod announcer.
//!
//! This crate provides the foundational pieces shared by the announcer
//! crates:
//!
//! - **Types**: [`AnnounceTarget`], [`AnnounceConfig`] and the
//!   [`NetworkAddress`] intermediate used during IP resolution
//! - **Errors**: the [`AnnounceError`] taxonomy with the crate-wide
//!   [`Result`] alias
//!
//! # Example
//!
//! ```rust,ignore
//! use announcer_core::{AnnounceTarget, Result};
//!
//! fn describe(target: &AnnounceTarget) -> Result<()> {
//!     println!("{} -> {}", target.hostname, target.ip);
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/announcer-core/0.1.0")]

mod error;
pub mod types;

pub use error::{AnnounceError, Result};
pub use types::*;
