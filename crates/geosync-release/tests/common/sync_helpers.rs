//! Config and syncer construction against a mock server

use geosync_core::{GitHubConfig, SyncConfig};
use geosync_release::{http_client, AssetDownloader, ReleaseClient, ReleaseSyncer};
use std::path::Path;

use super::constants::*;

/// Sync configuration pointing at a mock API server
pub fn test_config(api_url: &str, cache_path: &Path) -> SyncConfig {
    SyncConfig {
        repo: TEST_REPO.to_string(),
        asset: ASSET_COUNTRY.to_string(),
        cache_path: cache_path.to_path_buf(),
        github: GitHubConfig {
            api_url: api_url.to_string(),
        },
        ..SyncConfig::default()
    }
}

/// Release client against a mock API server, optionally authenticated
pub fn test_client(api_url: &str, token: Option<&str>) -> ReleaseClient {
    let config = GitHubConfig {
        api_url: api_url.to_string(),
    };
    let http = http_client(&Default::default()).unwrap();
    ReleaseClient::new(http, &config, token.map(String::from))
}

/// Asset downloader scoped to a mock API server, optionally authenticated
pub fn test_downloader(api_url: &str, token: Option<&str>) -> AssetDownloader {
    let config = GitHubConfig {
        api_url: api_url.to_string(),
    };
    let http = http_client(&Default::default()).unwrap();
    AssetDownloader::new(http, &config, token.map(String::from)).with_progress(false)
}

/// Syncer against a mock API server with progress output disabled
pub fn test_syncer(api_url: &str, cache_path: &Path) -> ReleaseSyncer {
    let config = test_config(api_url, cache_path);
    let http = http_client(&config.network).unwrap();
    ReleaseSyncer::new(http, &config, None)
        .unwrap()
        .with_progress(false)
}
