//! Status command

use anyhow::Result;
use camino::Utf8Path;
use geosync_release::read_stored_tag;
use std::fs;

use crate::cli::StatusArgs;
use crate::output;

pub fn run(args: StatusArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    let config = super::load_config(config_path, None, None, args.cache_path)?;

    output::kv("repository", &config.repo);
    output::kv("asset", &config.asset);
    output::kv("cache path", &config.cache_path.display().to_string());

    match fs::metadata(&config.cache_path) {
        Ok(meta) => {
            output::kv("cache size", &format!("{} bytes", meta.len()));
            let stored = read_stored_tag(&config.cache_path);
            if stored.is_empty() {
                output::warning("No recorded release tag; next sync will re-download");
            } else {
                output::kv("release tag", &stored);
            }
        }
        Err(_) => {
            output::warning("Cache file not present; run 'geosync sync' to download");
        }
    }

    Ok(())
}
