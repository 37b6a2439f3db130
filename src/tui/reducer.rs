use std::time::SystemTime;

use tracing::{debug, info};

use crate::playback::PlaybackInput;
use crate::replay::Replay;
use crate::timeline::Pacing;
use crate::types::Snapshot;

use super::action::Action;
use super::highlights::Highlights;
use super::state::AppState;

/// Side effect requested by the reducer, executed by the run loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Refresh,
    Quit,
}

/// Pure state reducer - like Redux reducer
///
/// Takes current state and an action, returns new state and an effect.
/// I/O never happens here; the run loop executes the returned `Effect`.
pub fn reduce(mut state: AppState, action: Action) -> (AppState, Effect) {
    match action {
        Action::Tick => {
            state.highlights.tick();
            if let Some(replay) = state.replay.as_mut() {
                replay.apply(PlaybackInput::Tick, &mut state.highlights);
            }
            (state, Effect::None)
        }
        Action::TogglePlay => {
            if let Some(replay) = state.replay.as_mut() {
                replay.apply(PlaybackInput::TogglePlay, &mut state.highlights);
                debug!("ACTION: playing={}", replay.is_playing());
            }
            (state, Effect::None)
        }
        Action::Restart => {
            if let Some(replay) = state.replay.take() {
                let playing = replay.is_playing();
                let snapshot = replay.snapshot().clone();
                state.replay = Some(start_replay(
                    snapshot,
                    &state.system.config.pacing,
                    playing,
                    &mut state.highlights,
                ));
            }
            (state, Effect::None)
        }
        Action::SnapshotLoaded(snapshot) => {
            info!("DATA: Replacing replay with {} games", snapshot.games.len());
            let playing = state.is_playing();
            state.replay = Some(start_replay(
                snapshot,
                &state.system.config.pacing,
                playing,
                &mut state.highlights,
            ));
            state.system.last_refresh = Some(SystemTime::now());
            state.system.error_message = None;
            (state, Effect::None)
        }
        Action::RefreshFailed(message) => {
            state.system.error_message = Some(message);
            (state, Effect::None)
        }
        Action::Refresh => (state, Effect::Refresh),
        Action::Quit => (state, Effect::Quit),
    }
}

/// Build a fresh replay, carrying over only whether playback was running
fn start_replay(snapshot: Snapshot, pacing: &Pacing, playing: bool, highlights: &mut Highlights) -> Replay {
    highlights.clear();
    let mut replay = Replay::new(snapshot, pacing);
    if playing {
        replay.apply(PlaybackInput::Play, highlights);
    }
    replay
}
