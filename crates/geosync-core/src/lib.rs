//! # geosync-core
//!
//! Core library for the geosync CLI providing:
//! - Configuration file parsing (geosync.yaml)
//! - Type definitions for the GitHub release source and network settings
//! - The error taxonomy shared across the workspace

pub mod config;
pub mod error;

pub use config::{GitHubConfig, NetworkConfig, SyncConfig};
pub use error::{Error, Result};
