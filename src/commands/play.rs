use std::time::Duration;

use anyhow::Result;
use tracing::info;

use crate::commands::{header, load_snapshot};
use crate::data_provider::SnapshotProvider;
use crate::formatting::format_event;
use crate::playback::{LogAnimations, PlaybackInput};
use crate::replay::{Replay, ReplayStep};
use crate::timeline::Pacing;

/// Play the replay in the terminal, one line per visible event
///
/// Stops at the end of the timeline or on Ctrl-C.
pub async fn run(provider: &dyn SnapshotProvider, pacing: &Pacing, tick_interval_ms: u64) -> Result<()> {
    let snapshot = load_snapshot(provider).await?;
    println!("{}", header("NHL REPLAY", &snapshot));

    let mut replay = Replay::new(snapshot, pacing);
    let mut animations = LogAnimations;
    let mut ticker = tokio::time::interval(Duration::from_millis(tick_interval_ms.max(1)));
    replay.apply(PlaybackInput::Play, &mut animations);

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Some(line) = step(&mut replay, &mut animations) {
                    println!("{}", line);
                }
                if replay.is_finished() {
                    info!("PLAY: Replay finished");
                    return Ok(());
                }
            }
            _ = &mut ctrl_c => {
                info!("PLAY: Interrupted");
                return Ok(());
            }
        }
    }
}

/// Advance one tick, returning the line for a newly visible event
pub fn step(replay: &mut Replay, animations: &mut LogAnimations) -> Option<String> {
    match replay.apply(PlaybackInput::Tick, animations) {
        ReplayStep::Visible => replay
            .current()
            .and_then(|event| format_event(event, &replay.snapshot().games)),
        ReplayStep::Hidden | ReplayStep::Held | ReplayStep::Finished => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_snapshot;
    use crate::timeline::build_timeline;

    #[test]
    fn test_step_prints_every_visible_event_once() {
        let snapshot = sample_snapshot();
        let pacing = Pacing::default();
        let expected: Vec<String> = build_timeline(&snapshot.games, &pacing)
            .iter()
            .filter_map(|event| format_event(event, &snapshot.games))
            .collect();

        let mut replay = Replay::new(snapshot, &pacing);
        let mut animations = LogAnimations;
        replay.apply(PlaybackInput::Play, &mut animations);

        let mut printed = Vec::new();
        while !replay.is_finished() {
            printed.extend(step(&mut replay, &mut animations));
        }
        assert_eq!(printed, expected);
    }

    #[test]
    fn test_step_holds_when_not_playing() {
        let mut replay = Replay::new(sample_snapshot(), &Pacing::default());
        let mut animations = LogAnimations;
        assert_eq!(step(&mut replay, &mut animations), None);
        assert_eq!(replay.position(), None);
    }
}
