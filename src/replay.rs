use std::sync::Arc;

use tracing::debug;

use crate::playback::{
    dispatch_update, display_phases, Animations, CursorOutput, CursorState, DisplayPhase,
    PlaybackCursor, PlaybackInput,
};
use crate::scoreboard::Scoreboard;
use crate::timeline::{build_timeline, Event, Pacing};
use crate::types::Snapshot;

/// Outcome of one input applied to a replay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayStep {
    /// A new event became current
    Visible,
    /// A pause placeholder was consumed
    Hidden,
    Held,
    Finished,
}

/// Everything derived from one snapshot
///
/// A new snapshot replaces the whole replay; nothing carries over except
/// what the caller chooses (e.g. whether playback was running).
pub struct Replay {
    snapshot: Arc<Snapshot>,
    cursor: PlaybackCursor,
    scoreboard: Scoreboard,
    phases: Vec<DisplayPhase>,
}

impl Replay {
    pub fn new(snapshot: Snapshot, pacing: &Pacing) -> Self {
        let events: Arc<[Event]> = build_timeline(&snapshot.games, pacing).into();
        debug!("REPLAY: New replay with {} events", events.len());
        let phases = display_phases(&Event::Start, &snapshot.games);
        Self {
            scoreboard: Scoreboard::new(snapshot.games.len()),
            cursor: PlaybackCursor::new(events),
            snapshot: Arc::new(snapshot),
            phases,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn events(&self) -> &[Event] {
        self.cursor.events()
    }

    /// Current visible event
    pub fn current(&self) -> Option<&Event> {
        self.cursor.current()
    }

    pub fn phases(&self) -> &[DisplayPhase] {
        &self.phases
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn is_playing(&self) -> bool {
        self.cursor.is_playing()
    }

    pub fn is_finished(&self) -> bool {
        self.cursor.is_finished()
    }

    /// Index of the cursor in the event list, if started
    pub fn position(&self) -> Option<usize> {
        match self.cursor.state() {
            CursorState::Idle => None,
            CursorState::Running { index } => Some(index),
            CursorState::Finished => Some(self.events().len()),
        }
    }

    /// Apply one input, updating scores, phases and animations
    pub fn apply(&mut self, input: PlaybackInput, animations: &mut dyn Animations) -> ReplayStep {
        match self.cursor.apply(input) {
            CursorOutput::Event(event) => {
                self.scoreboard.apply(event);
                if let Event::GameUpdate(update) = event {
                    dispatch_update(animations, update);
                }
                self.phases = display_phases(event, &self.snapshot.games);
                ReplayStep::Visible
            }
            CursorOutput::Hidden => ReplayStep::Hidden,
            CursorOutput::Held => ReplayStep::Held,
            CursorOutput::Finished => ReplayStep::Finished,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_snapshot;
    use crate::playback::LogAnimations;
    use crate::timeline::GameGoal;

    #[derive(Default)]
    struct Counter {
        starts: usize,
        goals: usize,
        ends: usize,
    }

    impl Animations for Counter {
        fn highlight_game_start(&mut self, _game_index: usize) {
            self.starts += 1;
        }

        fn highlight_goal(&mut self, _game_index: usize, _goal: &GameGoal) {
            self.goals += 1;
        }

        fn highlight_game_end(&mut self, _game_index: usize) {
            self.ends += 1;
        }
    }

    fn play_to_end(replay: &mut Replay, animations: &mut dyn Animations) -> Vec<Event> {
        replay.apply(PlaybackInput::Play, animations);
        let mut visible = Vec::new();
        loop {
            match replay.apply(PlaybackInput::Tick, animations) {
                ReplayStep::Visible => visible.push(replay.current().cloned().unwrap()),
                ReplayStep::Finished => return visible,
                ReplayStep::Hidden | ReplayStep::Held => {}
            }
        }
    }

    #[test]
    fn test_full_playback_of_sample_snapshot() {
        let snapshot = sample_snapshot();
        let mut replay = Replay::new(snapshot.clone(), &Pacing::default());
        let mut counter = Counter::default();
        let visible = play_to_end(&mut replay, &mut counter);

        assert!(visible.iter().all(|e| !e.is_pause()));
        assert_eq!(visible.first(), Some(&Event::Start));
        assert_eq!(visible.last(), Some(&Event::End { in_progress: true }));
        assert_eq!(counter.starts, counter.goals);
        assert_eq!(counter.goals, counter.ends);
        assert_eq!(replay.position(), Some(replay.events().len()));

        // Regulation final: every goal shown, 3-2 for the away side
        let score = replay.scoreboard().game(0).unwrap();
        assert_eq!((score.away, score.home), (3, 2));
        // Shootout final: regulation goals plus the decisive shootout goal
        let score = replay.scoreboard().game(2).unwrap();
        assert_eq!((score.away, score.home), (2, 1));
        assert_eq!(score.latest_goal().unwrap().goal.scorer.player, "Mika Zibanejad");

        assert_eq!(
            replay.phases(),
            &[
                DisplayPhase::PostGameFinished,
                DisplayPhase::PostGameFinished,
                DisplayPhase::PostGameFinished,
                DisplayPhase::PostGameInProgress,
                DisplayPhase::PreGame,
                DisplayPhase::PreGame,
            ]
        );
    }

    #[test]
    fn test_replay_starts_held() {
        let mut replay = Replay::new(sample_snapshot(), &Pacing::default());
        let mut animations = LogAnimations;
        assert_eq!(replay.apply(PlaybackInput::Tick, &mut animations), ReplayStep::Held);
        assert_eq!(replay.position(), None);
        assert!(replay.current().is_none());
        assert_eq!(replay.phases()[0], DisplayPhase::MidPlayback);
        assert_eq!(replay.phases()[4], DisplayPhase::PreGame);
    }

    #[test]
    fn test_identical_snapshots_replay_identically() {
        let mut first = Replay::new(sample_snapshot(), &Pacing::default());
        let mut second = Replay::new(sample_snapshot(), &Pacing::default());
        let mut animations = LogAnimations;
        assert_eq!(
            play_to_end(&mut first, &mut animations),
            play_to_end(&mut second, &mut animations)
        );
    }
}
