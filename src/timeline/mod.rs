//! Playback timeline synthesis
//!
//! Turns one score snapshot into the flat, deterministic list of events that
//! the playback cursor walks through:
//!
//! - [`goals`] collects every goal into one time-sorted list
//! - [`end_time`] finds the clock position where the shared clock stops
//! - [`period`] produces the clock ticks of one period with goals spliced in
//! - [`assembler`] glues the periods together with narrative markers

pub mod assembler;
pub mod end_time;
pub mod goals;
pub mod period;

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::types::{Goal, Period, Side};

pub use assembler::build_timeline;
pub use end_time::{game_end_time, resolve_end_time, GameEndTime, RemainingTime};
pub use goals::collect_goals;
pub use period::PeriodSequencer;

/// Position on the shared clock
///
/// Ordered by period ordinal, then by remaining time descending, so that a
/// greater position is further into the replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimelinePosition {
    pub ordinal: u32,
    pub remaining_tenths: u32,
}

impl TimelinePosition {
    pub fn new(ordinal: u32, remaining_tenths: u32) -> Self {
        Self { ordinal, remaining_tenths }
    }

    /// Position of a period's last instant
    pub fn period_end(period: Period) -> Self {
        Self::new(period.ordinal(), 0)
    }
}

impl Ord for TimelinePosition {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal
            .cmp(&other.ordinal)
            .then_with(|| other.remaining_tenths.cmp(&self.remaining_tenths))
    }
}

impl PartialOrd for TimelinePosition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A clock tick, in remaining time within the period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Clock {
    pub period: Period,
    pub minute: u32,
    pub second: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenth_of_second: Option<u32>,
}

impl Clock {
    pub fn new(period: Period, minute: u32, second: u32) -> Self {
        Self { period, minute, second, tenth_of_second: None }
    }

    pub fn with_tenths(period: Period, minute: u32, second: u32, tenths: u32) -> Self {
        Self { period, minute, second, tenth_of_second: Some(tenths) }
    }

    pub fn remaining_tenths(&self) -> u32 {
        (self.minute * 60 + self.second) * 10 + self.tenth_of_second.unwrap_or(0)
    }

    pub fn position(&self) -> TimelinePosition {
        TimelinePosition::new(self.period.ordinal(), self.remaining_tenths())
    }
}

/// Where a game update happened: on a running clock or in the shootout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ClockPosition {
    Clock(Clock),
    Shootout,
}

impl ClockPosition {
    pub fn position(&self) -> TimelinePosition {
        match self {
            ClockPosition::Clock(clock) => clock.position(),
            ClockPosition::Shootout => TimelinePosition::period_end(Period::Shootout),
        }
    }

    pub fn period(&self) -> Period {
        match self {
            ClockPosition::Clock(clock) => clock.period,
            ClockPosition::Shootout => Period::Shootout,
        }
    }
}

/// A goal tagged with the game it belongs to and the side that scored
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameGoal {
    pub game_index: usize,
    pub side: Side,
    pub goal: Goal,
}

impl GameGoal {
    /// Position of the goal on the shared clock, `None` for shootout goals
    pub fn position(&self) -> Option<TimelinePosition> {
        let period = self.goal.period;
        if period.is_shootout() {
            return None;
        }
        let length_tenths = period.length_minutes() * 600;
        let elapsed_tenths = self.goal.elapsed_seconds() * 10;
        Some(TimelinePosition::new(
            period.ordinal(),
            length_tenths.saturating_sub(elapsed_tenths),
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateKind {
    Start,
    Goal,
    End,
}

/// A game-specific state change during playback
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameUpdate {
    pub at: ClockPosition,
    pub game_index: usize,
    pub kind: UpdateKind,
    pub goal: GameGoal,
}

/// One position of the playback timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Event {
    Start,
    Clock(Clock),
    GameUpdate(GameUpdate),
    #[serde(rename_all = "camelCase")]
    PeriodEnd { period: Period },
    #[serde(rename_all = "camelCase")]
    PreSummary { in_progress: bool },
    #[serde(rename_all = "camelCase")]
    Summary { in_progress: bool },
    #[serde(rename_all = "camelCase")]
    End { in_progress: bool },
    Pause,
}

impl Event {
    pub fn is_pause(&self) -> bool {
        matches!(self, Event::Pause)
    }

    /// Clock position of the event, for events that sit on the shared clock
    pub fn position(&self) -> Option<TimelinePosition> {
        match self {
            Event::Clock(clock) => Some(clock.position()),
            Event::GameUpdate(update) => Some(update.at.position()),
            Event::PeriodEnd { period } => Some(TimelinePosition::period_end(*period)),
            Event::Start
            | Event::PreSummary { .. }
            | Event::Summary { .. }
            | Event::End { .. }
            | Event::Pause => None,
        }
    }
}

/// Pause lengths (in ticks) that pace the replay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pacing {
    pub start_pause: usize,
    pub period_end_pause: usize,
    pub pre_summary_pause: usize,
    pub summary_pause: usize,
    /// Pause after a goal, indexed by assist count; the last entry repeats
    pub goal_pauses: Vec<usize>,
    /// Seconds advanced per tick; derived from the game count when unset
    pub clock_advance_step: Option<u32>,
}

/// Games shown per unit of clock advance step
const GAMES_PER_CLOCK_STEP: u32 = 5;

impl Default for Pacing {
    fn default() -> Self {
        Pacing {
            start_pause: 50,
            period_end_pause: 150,
            pre_summary_pause: 150,
            summary_pause: 150,
            goal_pauses: vec![50, 65, 80],
            clock_advance_step: None,
        }
    }
}

impl Pacing {
    pub fn goal_pause(&self, assist_count: usize) -> usize {
        match self.goal_pauses.get(assist_count) {
            Some(count) => *count,
            None => self.goal_pauses.last().copied().unwrap_or(0),
        }
    }

    /// Clock step for a number of simultaneously displayed games
    pub fn clock_advance_step(&self, game_count: usize) -> u32 {
        if let Some(step) = self.clock_advance_step {
            return step.max(1);
        }
        let games = game_count.max(1) as u32;
        1 + (games - 1) / GAMES_PER_CLOCK_STEP
    }
}
