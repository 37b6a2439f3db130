use std::collections::BTreeMap;

use super::{Clock, ClockPosition, Event, GameEndTime, GameGoal, GameUpdate, Pacing, UpdateKind};
use crate::types::{Period, Side, REGULATION_PERIODS};

/// Tenths of a second counted down in the final minute of regulation
const FINAL_MINUTE_TENTHS_FROM: u32 = 9;

/// Produces the event sequence of one period
///
/// Holds the globally sorted goal list and pacing shared by every period of
/// one timeline build.
pub struct PeriodSequencer<'a> {
    goals: &'a [GameGoal],
    pacing: &'a Pacing,
    clock_advance_step: u32,
}

impl<'a> PeriodSequencer<'a> {
    pub fn new(goals: &'a [GameGoal], pacing: &'a Pacing, clock_advance_step: u32) -> Self {
        Self {
            goals,
            pacing,
            clock_advance_step: clock_advance_step.max(1),
        }
    }

    /// Clock ticks of a period with goal clusters spliced in
    ///
    /// `end_time` truncates the period at its remaining time; `None` (or an
    /// end time with the period fully elapsed) runs the whole period.
    pub fn sequence(&self, period: Period, length_minutes: u32, end_time: Option<&GameEndTime>) -> Vec<Event> {
        let ticks = period_clock(period, length_minutes, end_time, self.clock_advance_step);

        let mut events = Vec::with_capacity(ticks.len());
        let mut previous: Option<&Clock> = None;
        for clock in &ticks {
            let scored: Vec<&GameGoal> = self
                .goals
                .iter()
                .filter(|goal| scored_between(goal, previous, clock))
                .collect();

            if scored.is_empty() {
                events.push(Event::Clock(*clock));
            } else {
                for goal in scored {
                    self.push_goal_cluster(&mut events, ClockPosition::Clock(*clock), goal);
                }
            }
            previous = Some(clock);
        }
        events
    }

    /// One goal cluster per game for the decisive shootout goal
    pub fn shootout(&self) -> Vec<Event> {
        let mut events = Vec::new();
        for goal in decisive_shootout_goals(self.goals) {
            self.push_goal_cluster(&mut events, ClockPosition::Shootout, goal);
        }
        events
    }

    fn push_goal_cluster(&self, events: &mut Vec<Event>, at: ClockPosition, goal: &GameGoal) {
        let update = |kind| {
            Event::GameUpdate(GameUpdate {
                at,
                game_index: goal.game_index,
                kind,
                goal: goal.clone(),
            })
        };

        events.push(update(UpdateKind::Start));
        events.push(update(UpdateKind::Goal));
        let pause = self.pacing.goal_pause(goal.goal.assists.len());
        events.extend(std::iter::repeat(Event::Pause).take(pause));
        events.push(update(UpdateKind::End));
    }
}

/// Goal scored strictly after `previous` and at or before `current`
///
/// The first tick of a period has no previous tick and only takes goals of
/// its own period.
fn scored_between(goal: &GameGoal, previous: Option<&Clock>, current: &Clock) -> bool {
    let Some(position) = goal.position() else {
        return false;
    };
    let after_previous = match previous {
        Some(previous) => position > previous.position(),
        None => position.ordinal == current.period.ordinal(),
    };
    after_previous && position <= current.position()
}

/// Clock ticks of a period, in remaining time
pub fn period_clock(period: Period, length_minutes: u32, end_time: Option<&GameEndTime>, step: u32) -> Vec<Clock> {
    let step = step.max(1);
    let truncate_at = end_time
        .filter(|end| end.period == period)
        .and_then(|end| end.partial_remaining());
    let (last_minute, last_second) = match truncate_at {
        Some(remaining) => (remaining.minute, remaining.second),
        None => (0, 0),
    };
    let final_regulation_minute = period == Period::Number(REGULATION_PERIODS) && truncate_at.is_none();

    let mut ticks = vec![Clock::new(period, length_minutes, 0)];
    for minute in (last_minute..length_minutes).rev() {
        let floor = if minute == last_minute { last_second } else { 0 };

        if minute == 0 && final_regulation_minute {
            ticks.extend(countdown(59, 1, step).into_iter().map(|second| Clock::new(period, 0, second)));
            ticks.extend(
                countdown(FINAL_MINUTE_TENTHS_FROM, 0, step)
                    .into_iter()
                    .map(|tenths| Clock::with_tenths(period, 0, 0, tenths)),
            );
        } else {
            ticks.extend(countdown(59, floor, step).into_iter().map(|second| Clock::new(period, minute, second)));
        }
    }
    ticks
}

/// Values from `from` down to `to` by `step`, always ending on `to`
fn countdown(from: u32, to: u32, step: u32) -> Vec<u32> {
    if from < to {
        return Vec::new();
    }
    let mut values: Vec<u32> = (to..=from).rev().step_by(step as usize).collect();
    if values.last() != Some(&to) {
        values.push(to);
    }
    values
}

/// The last shootout goal of the winning team, per game, in game order
fn decisive_shootout_goals(goals: &[GameGoal]) -> Vec<&GameGoal> {
    let mut by_game: BTreeMap<usize, Vec<&GameGoal>> = BTreeMap::new();
    for goal in goals.iter().filter(|g| g.goal.period.is_shootout()) {
        by_game.entry(goal.game_index).or_default().push(goal);
    }

    by_game
        .into_values()
        .filter_map(|game_goals| {
            let away = game_goals.iter().filter(|g| g.side == Side::Away).count();
            let home = game_goals.len() - away;
            let winner = match away.cmp(&home) {
                std::cmp::Ordering::Greater => Side::Away,
                std::cmp::Ordering::Less => Side::Home,
                std::cmp::Ordering::Equal => return None,
            };
            game_goals.into_iter().rev().find(|g| g.side == winner)
        })
        .collect()
}
