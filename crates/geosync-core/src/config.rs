//! Configuration types and loading for geosync
//!
//! A geosync.yaml file configures which release feed to watch, which asset
//! to mirror, and where the cached copy lives. Every field has a default, so
//! an absent config file is valid.

use crate::error::{Error, Result};
use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Configuration file names to search for
const CONFIG_FILE_NAMES: &[&str] = &["geosync.yaml", "geosync.yml"];

/// Complete sync configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SyncConfig {
    /// Source repository in owner/name form
    #[serde(default = "default_repo")]
    pub repo: String,

    /// Release asset file name to mirror
    #[serde(default = "default_asset")]
    pub asset: String,

    /// Local path the cached asset is written to
    #[serde(default = "default_cache_path")]
    pub cache_path: PathBuf,

    /// Access token for authenticated (higher rate limit) API access
    #[serde(default)]
    pub token: Option<String>,

    /// GitHub endpoint settings
    #[serde(default)]
    pub github: GitHubConfig,

    /// Network and HTTP settings
    #[serde(default)]
    pub network: NetworkConfig,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            repo: default_repo(),
            asset: default_asset(),
            cache_path: default_cache_path(),
            token: None,
            github: GitHubConfig::default(),
            network: NetworkConfig::default(),
        }
    }
}

impl SyncConfig {
    /// Load configuration from the specified path or search for it
    ///
    /// An explicit path must exist; without one, the standard file names are
    /// searched in the working directory and defaults are used when none is
    /// found.
    pub fn load(path: Option<&Utf8Path>) -> Result<Self> {
        let content = if let Some(p) = path {
            Some(fs::read_to_string(p).map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::config_not_found(p.as_str())
                } else {
                    Error::Io(e)
                }
            })?)
        } else {
            CONFIG_FILE_NAMES
                .iter()
                .find_map(|name| fs::read_to_string(name).ok())
        };

        match content {
            Some(content) => Ok(serde_yaml_ng::from_str(&content)?),
            None => Ok(Self::default()),
        }
    }

    /// Resolve the access token from, in order: an explicit value, the
    /// GITHUB_TOKEN or GH_TOKEN environment variables, the config file
    pub fn resolve_token(&self, explicit: Option<String>) -> Option<String> {
        explicit
            .or_else(|| std::env::var("GITHUB_TOKEN").ok())
            .or_else(|| std::env::var("GH_TOKEN").ok())
            .or_else(|| self.token.clone())
            .filter(|t| !t.is_empty())
    }
}

/// GitHub endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GitHubConfig {
    /// Base URL for the releases API
    #[serde(default = "default_github_api_url")]
    pub api_url: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: default_github_api_url(),
        }
    }
}

/// Network and HTTP configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NetworkConfig {
    /// Connect timeout in seconds
    #[serde(default = "default_http_timeout")]
    pub http_timeout_secs: u64,

    /// Overall download timeout in seconds
    #[serde(default = "default_download_timeout")]
    pub download_timeout_secs: u64,

    /// User agent string for HTTP requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            http_timeout_secs: default_http_timeout(),
            download_timeout_secs: default_download_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_repo() -> String {
    "P3TERX/GeoLite.mmdb".to_string()
}
fn default_asset() -> String {
    "GeoLite2-Country.mmdb".to_string()
}
fn default_cache_path() -> PathBuf {
    PathBuf::from("GeoLite2-Country.mmdb")
}
fn default_github_api_url() -> String {
    "https://api.github.com".to_string()
}
fn default_http_timeout() -> u64 {
    30
}
fn default_download_timeout() -> u64 {
    300 // 5 minutes
}
fn default_user_agent() -> String {
    format!(
        "geosync/{} ({}; {})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}
