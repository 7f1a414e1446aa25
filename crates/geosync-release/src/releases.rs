//! GitHub releases metadata client

use futures_util::StreamExt;
use geosync_core::{Error, GitHubConfig, NetworkConfig, Result};
use reqwest::header::ACCEPT;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::repo::RepoRef;

/// Media type expected from the releases API
pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// API version header value
pub const GITHUB_API_VERSION: &str = "2022-11-28";

/// Upper bound on how much of an error response body is kept
const ERROR_BODY_LIMIT: usize = 512;

/// Latest-release metadata, decoded from one API response
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    /// Release tag (e.g., "2026.02.25")
    pub tag_name: String,

    /// Release assets, in API order
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

/// Release asset
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    /// Asset name
    pub name: String,

    /// Download URL
    pub browser_download_url: String,
}

/// A release asset resolved by name
#[derive(Debug, Clone)]
pub struct ResolvedAsset {
    /// Tag of the release the asset belongs to
    pub tag: String,

    /// Download URL for the asset body
    pub download_url: String,
}

/// Client for the latest-release metadata endpoint
pub struct ReleaseClient {
    /// HTTP client, supplied by the caller
    client: reqwest::Client,

    /// Base URL of the releases API
    api_url: String,

    /// Optional bearer token
    token: Option<String>,
}

impl ReleaseClient {
    /// Create a new release client
    pub fn new(client: reqwest::Client, github: &GitHubConfig, token: Option<String>) -> Self {
        Self {
            client,
            api_url: github.api_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Base URL of the releases API
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Fetch the latest release for a repository
    pub async fn fetch_latest(&self, repo: &RepoRef) -> Result<Release> {
        let url = format!(
            "{}/repos/{}/{}/releases/latest",
            self.api_url, repo.owner, repo.name
        );

        debug!("Fetching latest release from: {}", url);

        let mut request = self
            .client
            .get(&url)
            .header(ACCEPT, GITHUB_ACCEPT)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::remote_api(
                status.as_u16(),
                body_excerpt(response).await,
            ));
        }

        let bytes = response.bytes().await?;
        let release: Release = serde_json::from_slice(&bytes)?;
        Ok(release)
    }

    /// Resolve the named asset of the latest release
    ///
    /// Scans the asset list in order; the first exact name match wins. A
    /// miss reports every asset name present, so naming mismatches are
    /// debuggable from the error alone.
    pub async fn resolve_asset(&self, repo: &RepoRef, asset_name: &str) -> Result<ResolvedAsset> {
        let release = self.fetch_latest(repo).await?;

        match release.assets.iter().find(|a| a.name == asset_name) {
            Some(asset) => Ok(ResolvedAsset {
                tag: release.tag_name,
                download_url: asset.browser_download_url.clone(),
            }),
            None => Err(Error::asset_not_found(
                asset_name,
                &release.tag_name,
                release.assets.into_iter().map(|a| a.name).collect(),
            )),
        }
    }
}

/// Build an HTTP client from network settings
pub fn http_client(network: &NetworkConfig) -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .user_agent(&network.user_agent)
        .connect_timeout(Duration::from_secs(network.http_timeout_secs))
        .timeout(Duration::from_secs(network.download_timeout_secs))
        .build()?)
}

/// Read at most [`ERROR_BODY_LIMIT`] bytes of a response body
///
/// Error pages can be arbitrarily verbose; the excerpt bounds memory and log
/// size. Stream errors mid-excerpt just truncate the excerpt.
pub(crate) async fn body_excerpt(response: reqwest::Response) -> String {
    let mut excerpt = Vec::with_capacity(ERROR_BODY_LIMIT);
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let Ok(chunk) = chunk else { break };
        excerpt.extend_from_slice(&chunk);
        if excerpt.len() >= ERROR_BODY_LIMIT {
            excerpt.truncate(ERROR_BODY_LIMIT);
            break;
        }
    }
    String::from_utf8_lossy(&excerpt).into_owned()
}
