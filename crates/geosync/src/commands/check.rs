//! Check command

use anyhow::{Context, Result};
use camino::Utf8Path;
use geosync_release::{http_client, ReleaseSyncer};

use crate::cli::CheckArgs;
use crate::output;

pub async fn run(args: CheckArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    let config = super::load_config(config_path, args.repo, args.asset, args.cache_path)?;
    let token = config.resolve_token(args.token);

    let http = http_client(&config.network).context("Failed to build HTTP client")?;
    let syncer = ReleaseSyncer::new(http, &config, token)?;

    let spinner = output::spinner("Checking latest release...");
    let resolved = syncer.latest().await?;
    spinner.finish_and_clear();

    output::info(&format!(
        "Latest release of {}: {}",
        syncer.repo(),
        resolved.tag
    ));

    if !syncer.cache_path().exists() {
        output::warning(&format!(
            "No cached copy at {}; run 'geosync sync' to download",
            syncer.cache_path().display()
        ));
        return Ok(());
    }

    let stored = syncer.stored_tag();
    if stored == resolved.tag {
        output::success("Cache is up to date");
    } else if stored.is_empty() {
        output::warning("Cache has no recorded tag; run 'geosync sync' to refresh");
    } else {
        output::warning(&format!(
            "Cache holds {}; run 'geosync sync' to update",
            stored
        ));
    }

    Ok(())
}
