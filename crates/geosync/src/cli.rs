//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// geosync - keep a local GeoLite2 database cache current with its release feed
#[derive(Parser, Debug)]
#[command(name = "geosync")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to geosync.yaml config file
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download the latest release asset if the cache is stale
    Sync(SyncArgs),

    /// Compare the latest release against the cache without downloading
    Check(CheckArgs),

    /// Show the local cache state without any network access
    Status(StatusArgs),
}

#[derive(Args, Debug, Default)]
pub struct SyncArgs {
    /// Source repository in owner/name form
    #[arg(long)]
    pub repo: Option<String>,

    /// Release asset file name to mirror
    #[arg(long)]
    pub asset: Option<String>,

    /// Local path the cached asset is written to
    #[arg(long)]
    pub cache_path: Option<Utf8PathBuf>,

    /// Access token for authenticated API access
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Disable the download progress bar
    #[arg(long)]
    pub no_progress: bool,
}

#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Source repository in owner/name form
    #[arg(long)]
    pub repo: Option<String>,

    /// Release asset file name to mirror
    #[arg(long)]
    pub asset: Option<String>,

    /// Local path the cached asset is written to
    #[arg(long)]
    pub cache_path: Option<Utf8PathBuf>,

    /// Access token for authenticated API access
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct StatusArgs {
    /// Local path the cached asset is written to
    #[arg(long)]
    pub cache_path: Option<Utf8PathBuf>,
}
