use std::time::SystemTime;

use crate::config::Config;
use crate::replay::Replay;

use super::highlights::Highlights;

/// Root application state - single source of truth
///
/// All state changes happen through the reducer.
#[derive(Default)]
pub struct AppState {
    /// Replay of the latest snapshot, once one has loaded
    pub replay: Option<Replay>,
    pub highlights: Highlights,
    pub system: SystemState,
}

#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub config: Config,
    pub last_refresh: Option<SystemTime>,
    pub error_message: Option<String>,
    /// Where snapshots come from, shown in the status bar
    pub source: String,
}

impl AppState {
    pub fn new(config: Config, source: String) -> Self {
        Self {
            system: SystemState {
                config,
                source,
                ..SystemState::default()
            },
            ..Self::default()
        }
    }

    pub fn is_playing(&self) -> bool {
        self.replay.as_ref().is_some_and(|replay| replay.is_playing())
    }
}
