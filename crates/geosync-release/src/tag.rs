//! Tag sidecar store
//!
//! The version tag of the cached content lives in a sidecar file next to it
//! (`cache.mmdb` -> `cache.mmdb.tag`). An absent or unreadable sidecar reads
//! as the empty string, a normal state meaning "no known tag".

use geosync_core::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Path of the sidecar file recording the cached release tag
pub fn tag_path(cache_path: &Path) -> PathBuf {
    let mut path = cache_path.as_os_str().to_os_string();
    path.push(".tag");
    PathBuf::from(path)
}

/// Read the stored tag, or empty string if absent or unreadable
pub fn read_stored_tag(cache_path: &Path) -> String {
    fs::read_to_string(tag_path(cache_path))
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Overwrite the sidecar with the given tag
pub fn write_stored_tag(cache_path: &Path, tag: &str) -> Result<()> {
    fs::write(tag_path(cache_path), format!("{tag}\n"))?;
    Ok(())
}
