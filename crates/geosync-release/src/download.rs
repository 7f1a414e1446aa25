//! Atomic asset download
//!
//! The asset body is streamed into a uniquely named temp file in the
//! destination directory, then renamed onto the destination path. The rename
//! stays on one filesystem, so readers observe either the previous complete
//! content or the new complete content, never a partial write.

use futures_util::StreamExt;
use geosync_core::{Error, GitHubConfig, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;
use url::{Origin, Url};

use crate::releases::body_excerpt;

/// Downloader for release asset bodies
pub struct AssetDownloader {
    /// HTTP client, supplied by the caller
    client: reqwest::Client,

    /// Origin of the releases API, for token scoping
    api_origin: Option<Origin>,

    /// Optional bearer token
    token: Option<String>,

    /// Enable progress bars
    show_progress: bool,
}

impl AssetDownloader {
    /// Create a new asset downloader
    pub fn new(client: reqwest::Client, github: &GitHubConfig, token: Option<String>) -> Self {
        Self {
            client,
            api_origin: Url::parse(&github.api_url).ok().map(|u| u.origin()),
            token,
            show_progress: true,
        }
    }

    /// Enable or disable progress bars
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Download a URL to the destination path
    ///
    /// The bearer token is only attached when the URL shares the API origin;
    /// asset bodies often live on pre-signed third-party hosts that must not
    /// see the credential.
    pub async fn download(&self, url: &str, dest: &Path) -> Result<()> {
        debug!("Downloading {} to {:?}", url, dest);

        let mut request = self.client.get(url);
        if let (Some(token), Some(api_origin)) = (&self.token, &self.api_origin) {
            let same_origin = Url::parse(url)
                .map(|u| u.origin() == *api_origin)
                .unwrap_or(false);
            if same_origin {
                request = request.bearer_auth(token);
            }
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::download(
                status.as_u16(),
                body_excerpt(response).await,
            ));
        }

        let dir = destination_dir(dest);
        fs::create_dir_all(&dir)?;

        let base = dest
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        // Artifacts of prior interrupted downloads must not accumulate.
        cleanup_stale_temp_files(&dir, &base);

        let mut tmp = tempfile::Builder::new()
            .prefix(&format!("{base}."))
            .tempfile_in(&dir)
            .map_err(Error::Write)?;

        let progress = if self.show_progress {
            response.content_length().map(download_progress_bar)
        } else {
            None
        };

        let mut written: u64 = 0;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk: bytes::Bytes = chunk?;
            tmp.write_all(&chunk).map_err(Error::Write)?;
            written += chunk.len() as u64;
            if let Some(pb) = &progress {
                pb.set_position(written);
            }
        }
        tmp.flush().map_err(Error::Write)?;

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        // Atomic publish; the temp file is removed on every failure path.
        tmp.persist(dest).map_err(|e| Error::Rename(e.error))?;

        debug!("Downloaded {} bytes to {:?}", written, dest);
        Ok(())
    }
}

/// Remove leftover temp files for a cache base name
///
/// Deletes regular files in `dir` named `{base}.*`, sparing the tag sidecar
/// `{base}.tag`. The cache file itself does not carry the dotted prefix and
/// is never touched.
pub fn cleanup_stale_temp_files(dir: &Path, base: &str) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    let prefix = format!("{base}.");
    let tag_name = format!("{base}.tag");
    for entry in entries.flatten() {
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if !name.starts_with(&prefix) || name == tag_name {
            continue;
        }
        if entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            debug!("Removing stale temp file {:?}", entry.path());
            let _ = fs::remove_file(entry.path());
        }
    }
}

/// Directory the destination lives in, defaulting to the working directory
fn destination_dir(dest: &Path) -> PathBuf {
    match dest.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn download_progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}, {eta})",
            )
            .expect("Invalid progress bar template")
            .progress_chars("#>-"),
    );
    pb
}
