use std::iter;

use tracing::debug;

use super::{collect_goals, resolve_end_time, Event, GameEndTime, Pacing, PeriodSequencer};
use crate::types::{Game, Period, REGULATION_PERIODS};

/// How much of a period the replay plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PeriodPlan {
    /// Runs to completion
    Full(Period),
    /// Holds the global end time
    Final(Period),
    /// Decisive shootout goals only
    Shootout,
}

impl PeriodPlan {
    fn period(&self) -> Period {
        match self {
            PeriodPlan::Full(period) | PeriodPlan::Final(period) => *period,
            PeriodPlan::Shootout => Period::Shootout,
        }
    }
}

/// Build the complete playback timeline for one snapshot
///
/// The result always starts with `Start` and ends with exactly one `End`.
/// Building twice from the same games yields identical lists.
pub fn build_timeline(games: &[Game], pacing: &Pacing) -> Vec<Event> {
    let end_time = resolve_end_time(games).unwrap_or_else(GameEndTime::regulation_end);
    let goals = collect_goals(games);
    let sequencer = PeriodSequencer::new(&goals, pacing, pacing.clock_advance_step(games.len()));
    let in_progress = games.iter().any(|game| !game.status.state.is_finished());

    let plans = plan_periods(&end_time);
    let mut events: Vec<Event> = iter::once(Event::Start)
        .chain(pauses(pacing.start_pause))
        .collect();

    for (i, plan) in plans.iter().enumerate() {
        let period_events = match plan {
            PeriodPlan::Full(period) => sequencer.sequence(*period, period.length_minutes(), None),
            PeriodPlan::Final(period) => sequencer.sequence(*period, period.length_minutes(), Some(&end_time)),
            PeriodPlan::Shootout => sequencer.shootout(),
        };
        events.extend(period_events);

        // A period the most advanced live game is still playing has not ended
        let is_last = i + 1 == plans.len();
        if is_last && end_time.in_progress {
            continue;
        }
        events.push(Event::PeriodEnd { period: plan.period() });
        events.extend(pauses(pacing.period_end_pause));
    }

    events.push(Event::PreSummary { in_progress });
    events.extend(pauses(pacing.pre_summary_pause));
    events.push(Event::Summary { in_progress });
    events.extend(pauses(pacing.summary_pause));
    events.push(Event::End { in_progress });

    debug!(
        "TIMELINE: Built {} events over {} periods for {} games",
        events.len(),
        plans.len(),
        games.len()
    );
    events
}

fn pauses(count: usize) -> impl Iterator<Item = Event> {
    iter::repeat(Event::Pause).take(count)
}

/// Periods to generate for a resolved end time
fn plan_periods(end_time: &GameEndTime) -> Vec<PeriodPlan> {
    let regulation = |last: u32| (1..=last).map(|n| PeriodPlan::Full(Period::Number(n)));

    match end_time.period {
        Period::Number(n) if n <= REGULATION_PERIODS => {
            let n = n.max(1);
            regulation(n - 1)
                .chain(iter::once(PeriodPlan::Final(Period::Number(n))))
                .collect()
        }
        Period::Number(n) => regulation(REGULATION_PERIODS)
            .chain(((REGULATION_PERIODS + 1)..n).map(|p| PeriodPlan::Full(Period::Number(p))))
            .chain(iter::once(PeriodPlan::Final(Period::Number(n))))
            .collect(),
        Period::Overtime => regulation(REGULATION_PERIODS)
            .chain(iter::once(PeriodPlan::Final(Period::Overtime)))
            .collect(),
        Period::Shootout => regulation(REGULATION_PERIODS)
            .chain([PeriodPlan::Full(Period::Overtime), PeriodPlan::Shootout])
            .collect(),
    }
}
