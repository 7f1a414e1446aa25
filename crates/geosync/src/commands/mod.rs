//! Command implementations

pub mod check;
pub mod status;
pub mod sync;

use anyhow::Result;
use camino::{Utf8Path, Utf8PathBuf};
use geosync_core::SyncConfig;

/// Load configuration and apply command-line overrides
pub(crate) fn load_config(
    config_path: Option<&Utf8Path>,
    repo: Option<String>,
    asset: Option<String>,
    cache_path: Option<Utf8PathBuf>,
) -> Result<SyncConfig> {
    let mut config = SyncConfig::load(config_path)?;
    if let Some(repo) = repo {
        config.repo = repo;
    }
    if let Some(asset) = asset {
        config.asset = asset;
    }
    if let Some(cache_path) = cache_path {
        config.cache_path = cache_path.into_std_path_buf();
    }
    Ok(config)
}
