//! Release synchronization for geosync
//!
//! Provides:
//! - Repository reference parsing (owner/name)
//! - Latest-release metadata lookup against the GitHub releases API
//! - Atomic asset download via temp-file-plus-rename
//! - A tag sidecar store for change detection
//! - A sync orchestrator composing the above into one idempotent operation

pub mod download;
pub mod releases;
pub mod repo;
pub mod sync;
pub mod tag;

pub use download::{cleanup_stale_temp_files, AssetDownloader};
pub use releases::{http_client, Release, ReleaseAsset, ReleaseClient, ResolvedAsset};
pub use repo::RepoRef;
pub use sync::{ReleaseSyncer, SyncOutcome};
pub use tag::{read_stored_tag, tag_path, write_stored_tag};
