//! Sync orchestrator
//!
//! Composes the release client, downloader, and tag store into a single
//! idempotent "ensure the cache is current" operation. Each call re-derives
//! everything from disk and network; there is no persistent state machine.

use geosync_core::{Result, SyncConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::download::AssetDownloader;
use crate::releases::{ReleaseClient, ResolvedAsset};
use crate::repo::RepoRef;
use crate::tag::{read_stored_tag, tag_path, write_stored_tag};

/// Result of one sync invocation
#[derive(Debug, Clone)]
pub struct SyncOutcome {
    /// Tag of the latest remote release
    pub tag: String,

    /// Whether new content was downloaded
    pub updated: bool,

    /// Whether the tag sidecar reflects the downloaded content
    ///
    /// False means the download succeeded but recording the tag failed; the
    /// next sync will redundantly re-download, nothing is lost.
    pub tag_persisted: bool,
}

/// Keeps one cache file current with the latest release asset
pub struct ReleaseSyncer {
    /// Metadata client
    client: ReleaseClient,

    /// Asset downloader
    downloader: AssetDownloader,

    /// Source repository
    repo: RepoRef,

    /// Asset name to mirror
    asset: String,

    /// Local cache path
    cache_path: PathBuf,
}

impl ReleaseSyncer {
    /// Create a syncer from configuration and a caller-built HTTP client
    ///
    /// Timeout and proxy policy belong to the supplied client; the syncer
    /// imposes none of its own.
    pub fn new(http: reqwest::Client, config: &SyncConfig, token: Option<String>) -> Result<Self> {
        let repo = RepoRef::parse(&config.repo)?;
        Ok(Self {
            client: ReleaseClient::new(http.clone(), &config.github, token.clone()),
            downloader: AssetDownloader::new(http, &config.github, token),
            repo,
            asset: config.asset.clone(),
            cache_path: config.cache_path.clone(),
        })
    }

    /// Enable or disable download progress bars
    pub fn with_progress(mut self, show: bool) -> Self {
        self.downloader = self.downloader.with_progress(show);
        self
    }

    /// Source repository
    pub fn repo(&self) -> &RepoRef {
        &self.repo
    }

    /// Asset name being mirrored
    pub fn asset(&self) -> &str {
        &self.asset
    }

    /// Local cache path
    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }

    /// Resolve the latest remote release and asset without touching disk
    pub async fn latest(&self) -> Result<ResolvedAsset> {
        self.client.resolve_asset(&self.repo, &self.asset).await
    }

    /// Tag recorded for the current cache content, if any
    pub fn stored_tag(&self) -> String {
        read_stored_tag(&self.cache_path)
    }

    /// Ensure the cache holds the latest release asset
    ///
    /// Fetches the latest release metadata, then downloads the asset only
    /// when the cache is missing or its recorded tag differs. A failed
    /// download leaves the existing cache completely untouched.
    pub async fn sync(&self) -> Result<SyncOutcome> {
        let resolved = self.latest().await?;

        if self.cache_path.exists() {
            let stored = read_stored_tag(&self.cache_path);
            if stored == resolved.tag {
                debug!(tag = %resolved.tag, "Cache already current");
                return Ok(SyncOutcome {
                    tag: resolved.tag,
                    updated: false,
                    tag_persisted: true,
                });
            }
            debug!(stored = %stored, latest = %resolved.tag, "Cache is stale");
        } else {
            // Content is gone, so any recorded tag is meaningless.
            let _ = fs::remove_file(tag_path(&self.cache_path));
            debug!("Cache file missing; forcing download");
        }

        info!(
            "Downloading {} {} from {}",
            self.asset, resolved.tag, self.repo
        );
        self.downloader
            .download(&resolved.download_url, &self.cache_path)
            .await?;

        let tag_persisted = match write_stored_tag(&self.cache_path, &resolved.tag) {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to record release tag: {}", e);
                false
            }
        };

        Ok(SyncOutcome {
            tag: resolved.tag,
            updated: true,
            tag_persisted,
        })
    }
}
