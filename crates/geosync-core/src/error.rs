//! Error types for geosync-core

use thiserror::Error;

/// Result type alias using geosync-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for geosync
#[derive(Error, Debug)]
pub enum Error {
    /// Repository string is not of the form owner/name
    #[error("invalid repository {input:?}: expected owner/name")]
    InvalidRepoFormat { input: String },

    /// Release API returned a non-success status
    #[error("release API returned HTTP {status}: {body}")]
    RemoteApi { status: u16, body: String },

    /// Release API response was not valid JSON
    #[error("failed to decode release response: {0}")]
    ResponseDecode(#[from] serde_json::Error),

    /// Requested asset is missing from the latest release
    #[error("asset {asset:?} not found in release {tag} (assets: {available:?})")]
    AssetNotFound {
        asset: String,
        tag: String,
        available: Vec<String>,
    },

    /// Asset endpoint returned a non-success status
    #[error("download failed with HTTP {status}: {body}")]
    Download { status: u16, body: String },

    /// Local I/O failure while streaming the asset body
    #[error("failed to write downloaded asset: {0}")]
    Write(#[source] std::io::Error),

    /// Renaming the temp file onto the cache path failed
    #[error("failed to publish downloaded asset: {0}")]
    Rename(#[source] std::io::Error),

    /// Configuration file not found
    #[error("configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Create an invalid repository format error
    pub fn invalid_repo_format(input: impl Into<String>) -> Self {
        Self::InvalidRepoFormat {
            input: input.into(),
        }
    }

    /// Create a remote API error from a status code and body excerpt
    pub fn remote_api(status: u16, body: impl Into<String>) -> Self {
        Self::RemoteApi {
            status,
            body: body.into(),
        }
    }

    /// Create an asset not found error
    pub fn asset_not_found(
        asset: impl Into<String>,
        tag: impl Into<String>,
        available: Vec<String>,
    ) -> Self {
        Self::AssetNotFound {
            asset: asset.into(),
            tag: tag.into(),
            available,
        }
    }

    /// Create a download error from a status code and body excerpt
    pub fn download(status: u16, body: impl Into<String>) -> Self {
        Self::Download {
            status,
            body: body.into(),
        }
    }

    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }
}
