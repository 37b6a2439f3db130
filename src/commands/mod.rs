pub mod goals;
pub mod play;
pub mod timeline;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};

use crate::data_provider::{FileSnapshotProvider, FixtureProvider, SnapshotProvider};
use crate::types::Snapshot;

/// Width of header separator line
const HEADER_SEPARATOR_WIDTH: usize = 60;

/// Pick the snapshot source from the command line
///
/// `--demo` uses the fixture snapshot; otherwise `--snapshot` is required.
pub fn snapshot_provider(path: Option<PathBuf>, demo: bool) -> Result<Arc<dyn SnapshotProvider>> {
    match (path, demo) {
        (Some(_), true) => bail!("Pass either --snapshot or --demo, not both"),
        (None, true) => Ok(Arc::new(FixtureProvider)),
        (Some(path), false) => Ok(Arc::new(
            FileSnapshotProvider::new(path).context("Invalid snapshot path")?,
        )),
        (None, false) => bail!("No snapshot given. Pass --snapshot <FILE> or --demo"),
    }
}

/// Fetch a snapshot, attributing failures to the provider
pub async fn load_snapshot(provider: &dyn SnapshotProvider) -> Result<Snapshot> {
    provider
        .snapshot()
        .await
        .with_context(|| format!("Failed to load snapshot from {}", provider.describe()))
}

/// Title block printed above command output
pub fn header(title: &str, snapshot: &Snapshot) -> String {
    let title = match snapshot.date {
        Some(date) => format!("{} - {}", title, date.format("%Y-%m-%d")),
        None => title.to_string(),
    };
    let rule = "═".repeat(HEADER_SEPARATOR_WIDTH);
    format!("{}\n{}\n{}", rule, title, rule)
}
