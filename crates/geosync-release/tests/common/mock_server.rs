//! Mock server helpers for releases API and asset download testing
//!
//! Provides utilities for setting up wiremock mock servers with the
//! response patterns the sync core consumes.

use serde_json::Value;
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::builders::standard_release_body;
use super::constants::*;

/// Path of the latest-release endpoint for the standard test repository
pub fn latest_release_path() -> String {
    format!("/repos/{REPO_OWNER}/{REPO_NAME}/releases/latest")
}

/// Mount the latest-release metadata endpoint
pub async fn mock_latest_release(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path(latest_release_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount a metadata endpoint that serves `first_tag` once, then `then_tag`
///
/// Both releases carry the standard Country + City asset pair served by the
/// same mock server.
pub async fn mock_latest_release_after_tag(server: &MockServer, first_tag: &str, then_tag: &str) {
    Mock::given(method("GET"))
        .and(path(latest_release_path()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(standard_release_body(&server.uri(), first_tag)),
        )
        .up_to_n_times(1)
        .mount(server)
        .await;
    mock_latest_release(server, standard_release_body(&server.uri(), then_tag)).await;
}

/// Mount a metadata endpoint that always fails with the given status and body
pub async fn mock_failing_latest_release(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(latest_release_path()))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

/// Mount an asset body at `/{name}`
pub async fn mock_asset(server: &MockServer, name: &str, content: &[u8]) {
    Mock::given(method("GET"))
        .and(path(format!("/{name}")))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(content))
        .mount(server)
        .await;
}

/// Mount an asset body at `/{name}` that must be fetched exactly `calls` times
pub async fn mock_asset_expect(server: &MockServer, name: &str, content: &[u8], calls: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/{name}")))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(content))
        .expect(calls)
        .mount(server)
        .await;
}

/// Mount an asset endpoint that always fails with the given status
pub async fn mock_failing_asset(server: &MockServer, name: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/{name}")))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

/// Mount an asset endpoint that rejects any request carrying an Authorization header
///
/// Requests with credentials hit the 500 mock mounted first; clean requests
/// fall through to the content mock. Lets tests assert a credential was NOT
/// sent by asserting the download succeeded.
pub async fn mock_asset_rejecting_auth(server: &MockServer, name: &str, content: &[u8]) {
    Mock::given(method("GET"))
        .and(path(format!("/{name}")))
        .and(header_exists("Authorization"))
        .respond_with(ResponseTemplate::new(500).set_body_string("credential leaked"))
        .mount(server)
        .await;
    mock_asset(server, name, content).await;
}
