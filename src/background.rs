use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::data_provider::SnapshotProvider;
use crate::types::Snapshot;

/// Message from the refresh loop to the front end
#[derive(Debug)]
pub enum RefreshMessage {
    /// A snapshot that differs from the last one delivered
    Snapshot(Snapshot),
    Error(String),
}

/// Fetch once, returning the snapshot only when it changed
async fn fetch_snapshot(
    provider: &dyn SnapshotProvider,
    last: &mut Option<Snapshot>,
) -> Option<RefreshMessage> {
    match provider.snapshot().await {
        Ok(snapshot) => {
            if last.as_ref() == Some(&snapshot) {
                debug!("REFRESH: Snapshot from {} unchanged", provider.describe());
                return None;
            }
            info!(
                "REFRESH: New snapshot from {} ({} games)",
                provider.describe(),
                snapshot.games.len()
            );
            *last = Some(snapshot.clone());
            Some(RefreshMessage::Snapshot(snapshot))
        }
        Err(e) => {
            warn!("REFRESH: {}", e);
            Some(RefreshMessage::Error(e.to_string()))
        }
    }
}

/// Background task loop that periodically re-reads the snapshot
///
/// Exits when the receiving side of `tx` is dropped.
pub async fn refresh_loop(
    provider: Arc<dyn SnapshotProvider>,
    interval: u64,
    tx: mpsc::Sender<RefreshMessage>,
    mut refresh_rx: mpsc::Receiver<()>,
) {
    let mut interval_timer = tokio::time::interval(Duration::from_secs(interval.max(1)));
    interval_timer.tick().await; // First tick completes immediately
    let mut last = None;

    loop {
        if let Some(message) = fetch_snapshot(provider.as_ref(), &mut last).await {
            if tx.send(message).await.is_err() {
                debug!("REFRESH: Receiver dropped, stopping");
                return;
            }
        }

        // Wait for either the interval timer or a manual refresh signal
        tokio::select! {
            _ = interval_timer.tick() => {}
            _ = refresh_rx.recv() => {
                debug!("REFRESH: Manual refresh");
            }
        }
    }
}
