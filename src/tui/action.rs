use crate::types::Snapshot;

/// Global actions - like Redux actions
///
/// All state changes in the TUI happen through actions, dispatched from key
/// events, the playback timer and the background refresh loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Playback timer fired
    Tick,
    TogglePlay,
    /// Rebuild the replay from the current snapshot and rewind
    Restart,
    /// Ask the background loop to re-read the snapshot now
    Refresh,
    Quit,

    SnapshotLoaded(Snapshot),
    RefreshFailed(String),
}
