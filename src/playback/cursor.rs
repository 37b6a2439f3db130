use std::sync::Arc;

use tracing::trace;

use crate::timeline::Event;

/// Control input driving the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackInput {
    /// Periodic timer tick
    Tick,
    Play,
    Pause,
    TogglePlay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// Nothing emitted yet
    Idle,
    Running { index: usize },
    /// Index reached the end of the timeline; terminal
    Finished,
}

/// What a single input produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorOutput<'a> {
    /// A visible event at the new index
    Event(&'a Event),
    /// The index advanced onto a pause placeholder
    Hidden,
    /// Nothing moved (not playing, or a play/pause input)
    Held,
    /// The stream has ended
    Finished,
}

/// Index-advancing cursor over an immutable timeline
///
/// Advances by exactly one index per tick while playing. Pause placeholders
/// consume their tick but are never reported as the current event.
#[derive(Debug, Clone)]
pub struct PlaybackCursor {
    events: Arc<[Event]>,
    state: CursorState,
    playing: bool,
    last_visible: Option<usize>,
}

impl PlaybackCursor {
    pub fn new(events: Arc<[Event]>) -> Self {
        Self {
            events,
            state: CursorState::Idle,
            playing: false,
            last_visible: None,
        }
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_finished(&self) -> bool {
        self.state == CursorState::Finished
    }

    pub fn events(&self) -> &Arc<[Event]> {
        &self.events
    }

    /// Last visible event emitted, if any
    pub fn current(&self) -> Option<&Event> {
        self.last_visible.map(|index| &self.events[index])
    }

    /// Apply one control input
    pub fn apply(&mut self, input: PlaybackInput) -> CursorOutput<'_> {
        match input {
            PlaybackInput::Tick => self.tick(),
            PlaybackInput::Play => self.set_playing(true),
            PlaybackInput::Pause => self.set_playing(false),
            PlaybackInput::TogglePlay => self.set_playing(!self.playing),
        }
    }

    fn set_playing(&mut self, playing: bool) -> CursorOutput<'_> {
        trace!("CURSOR: playing={}", playing);
        self.playing = playing;
        if self.is_finished() {
            CursorOutput::Finished
        } else {
            CursorOutput::Held
        }
    }

    fn tick(&mut self) -> CursorOutput<'_> {
        let next = match self.state {
            CursorState::Finished => return CursorOutput::Finished,
            _ if !self.playing => return CursorOutput::Held,
            CursorState::Idle => 0,
            CursorState::Running { index } => index + 1,
        };

        if next >= self.events.len() {
            trace!("CURSOR: Finished after {} events", self.events.len());
            self.state = CursorState::Finished;
            return CursorOutput::Finished;
        }

        self.state = CursorState::Running { index: next };
        if self.events[next].is_pause() {
            return CursorOutput::Hidden;
        }
        self.last_visible = Some(next);
        CursorOutput::Event(&self.events[next])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::Clock;
    use crate::types::Period;

    fn clock(second: u32) -> Event {
        Event::Clock(Clock::new(Period::Number(1), 0, second))
    }

    fn events(list: Vec<Event>) -> Arc<[Event]> {
        list.into()
    }

    /// Ticks until a visible event or the end, returning the tick count
    fn ticks_to_next_visible(cursor: &mut PlaybackCursor) -> (usize, Option<Event>) {
        let mut ticks = 0;
        loop {
            ticks += 1;
            match cursor.apply(PlaybackInput::Tick) {
                CursorOutput::Event(event) => return (ticks, Some(event.clone())),
                CursorOutput::Finished => return (ticks, None),
                CursorOutput::Hidden | CursorOutput::Held => {}
            }
        }
    }

    #[test]
    fn test_starts_idle_and_paused() {
        let mut cursor = PlaybackCursor::new(events(vec![Event::Start]));
        assert_eq!(cursor.state(), CursorState::Idle);
        assert!(!cursor.is_playing());
        assert_eq!(cursor.apply(PlaybackInput::Tick), CursorOutput::Held);
        assert_eq!(cursor.state(), CursorState::Idle);
        assert!(cursor.current().is_none());
    }

    #[test]
    fn test_advances_one_per_tick() {
        let mut cursor = PlaybackCursor::new(events(vec![Event::Start, clock(2), clock(1)]));
        cursor.apply(PlaybackInput::Play);

        assert_eq!(cursor.apply(PlaybackInput::Tick), CursorOutput::Event(&Event::Start));
        assert_eq!(cursor.state(), CursorState::Running { index: 0 });
        assert_eq!(cursor.apply(PlaybackInput::Tick), CursorOutput::Event(&clock(2)));
        assert_eq!(cursor.apply(PlaybackInput::Tick), CursorOutput::Event(&clock(1)));
        assert_eq!(cursor.apply(PlaybackInput::Tick), CursorOutput::Finished);
        assert!(cursor.is_finished());
    }

    #[test]
    fn test_finished_is_terminal() {
        let mut cursor = PlaybackCursor::new(events(vec![Event::Start]));
        cursor.apply(PlaybackInput::Play);
        cursor.apply(PlaybackInput::Tick);
        assert_eq!(cursor.apply(PlaybackInput::Tick), CursorOutput::Finished);
        assert_eq!(cursor.apply(PlaybackInput::Pause), CursorOutput::Finished);
        assert_eq!(cursor.apply(PlaybackInput::Play), CursorOutput::Finished);
        assert_eq!(cursor.apply(PlaybackInput::Tick), CursorOutput::Finished);
        assert_eq!(cursor.current(), Some(&Event::Start));
    }

    #[test]
    fn test_pauses_are_invisible_but_take_ticks() {
        let with_pauses = events(vec![Event::Start, Event::Pause, Event::Pause, Event::Pause, clock(5)]);
        let without = events(vec![Event::Start, clock(5)]);

        let mut cursor = PlaybackCursor::new(with_pauses);
        cursor.apply(PlaybackInput::Play);
        let mut plain = PlaybackCursor::new(without);
        plain.apply(PlaybackInput::Play);

        assert_eq!(ticks_to_next_visible(&mut cursor), (1, Some(Event::Start)));
        assert_eq!(ticks_to_next_visible(&mut plain), (1, Some(Event::Start)));

        let (paused_ticks, event) = ticks_to_next_visible(&mut cursor);
        let (plain_ticks, _) = ticks_to_next_visible(&mut plain);
        assert_eq!(event, Some(clock(5)));
        assert_eq!(paused_ticks, plain_ticks + 3);
    }

    #[test]
    fn test_current_never_a_pause() {
        let mut cursor = PlaybackCursor::new(events(vec![Event::Start, Event::Pause, Event::Pause]));
        cursor.apply(PlaybackInput::Play);
        while !cursor.is_finished() {
            cursor.apply(PlaybackInput::Tick);
            assert_eq!(cursor.current(), Some(&Event::Start));
        }
    }

    #[test]
    fn test_pause_toggle_holds_position() {
        let mut cursor = PlaybackCursor::new(events(vec![Event::Start, clock(2), clock(1)]));
        cursor.apply(PlaybackInput::TogglePlay);
        assert!(cursor.is_playing());
        cursor.apply(PlaybackInput::Tick);

        cursor.apply(PlaybackInput::TogglePlay);
        for _ in 0..5 {
            assert_eq!(cursor.apply(PlaybackInput::Tick), CursorOutput::Held);
        }
        assert_eq!(cursor.state(), CursorState::Running { index: 0 });

        cursor.apply(PlaybackInput::Play);
        assert_eq!(cursor.apply(PlaybackInput::Tick), CursorOutput::Event(&clock(2)));
    }

    #[test]
    fn test_empty_timeline_finishes_on_first_tick() {
        let mut cursor = PlaybackCursor::new(events(vec![]));
        cursor.apply(PlaybackInput::Play);
        assert_eq!(cursor.apply(PlaybackInput::Tick), CursorOutput::Finished);
    }
}
