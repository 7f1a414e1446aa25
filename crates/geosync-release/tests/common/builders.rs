//! Builder patterns for test data construction
//!
//! Provides a fluent API for constructing release API response bodies with
//! sensible defaults for testing.

use serde_json::{json, Value};

use super::constants::*;

/// Builder for release API response JSON
#[derive(Debug, Clone)]
pub struct ReleaseBodyBuilder {
    tag_name: String,
    assets: Vec<(String, String)>,
}

impl ReleaseBodyBuilder {
    /// Create a new builder with the default test tag and no assets
    pub fn new() -> Self {
        Self {
            tag_name: TAG_V1.to_string(),
            assets: Vec::new(),
        }
    }

    /// Set the release tag
    pub fn tag(mut self, tag: &str) -> Self {
        self.tag_name = tag.to_string();
        self
    }

    /// Add an asset with an explicit download URL
    pub fn asset(mut self, name: &str, url: &str) -> Self {
        self.assets.push((name.to_string(), url.to_string()));
        self
    }

    /// Add an asset served by a mock server at `/{name}`
    pub fn mock_asset(mut self, server_uri: &str, name: &str) -> Self {
        self.assets
            .push((name.to_string(), format!("{server_uri}/{name}")));
        self
    }

    /// Build the response body
    pub fn build(self) -> Value {
        json!({
            "tag_name": self.tag_name,
            "assets": self
                .assets
                .into_iter()
                .map(|(name, url)| json!({ "name": name, "browser_download_url": url }))
                .collect::<Vec<_>>(),
        })
    }
}

impl Default for ReleaseBodyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Release body with the standard Country + City asset pair
pub fn standard_release_body(server_uri: &str, tag: &str) -> Value {
    ReleaseBodyBuilder::new()
        .tag(tag)
        .mock_asset(server_uri, ASSET_COUNTRY)
        .mock_asset(server_uri, ASSET_CITY)
        .build()
}
