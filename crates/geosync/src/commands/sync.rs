//! Sync command

use anyhow::{Context, Result};
use camino::Utf8Path;
use geosync_release::{http_client, ReleaseSyncer};

use crate::cli::SyncArgs;
use crate::output;

pub async fn run(args: SyncArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    let config = super::load_config(config_path, args.repo, args.asset, args.cache_path)?;
    let token = config.resolve_token(args.token);

    let http = http_client(&config.network).context("Failed to build HTTP client")?;
    let syncer = ReleaseSyncer::new(http, &config, token)?.with_progress(!args.no_progress);

    let outcome = syncer.sync().await?;

    if outcome.updated {
        output::success(&format!(
            "Updated {} to release {}",
            syncer.cache_path().display(),
            outcome.tag
        ));
    } else {
        output::success(&format!("Already up to date ({})", outcome.tag));
    }

    if !outcome.tag_persisted {
        output::warning(
            "Downloaded content is current, but recording the release tag failed; \
             the next sync will re-download",
        );
    }

    Ok(())
}
