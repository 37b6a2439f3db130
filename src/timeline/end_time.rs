use serde::Serialize;
use tracing::debug;

use super::TimelinePosition;
use crate::types::{Game, GameProgress, Period, REGULATION_PERIODS};

/// Remaining time on the period clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RemainingTime {
    pub minute: u32,
    pub second: u32,
}

impl RemainingTime {
    pub fn new(minute: u32, second: u32) -> Self {
        Self { minute, second }
    }

    pub fn is_zero(&self) -> bool {
        self.minute == 0 && self.second == 0
    }

    pub fn tenths(&self) -> u32 {
        (self.minute * 60 + self.second) * 10
    }
}

/// Clock position at which a game's relevant action stops
///
/// `remaining` is `None` when the period has fully elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameEndTime {
    pub period: Period,
    pub remaining: Option<RemainingTime>,
    pub in_progress: bool,
}

impl GameEndTime {
    /// End of the third period: a game decided in regulation
    pub fn regulation_end() -> Self {
        Self {
            period: Period::Number(REGULATION_PERIODS),
            remaining: None,
            in_progress: false,
        }
    }

    /// Remaining time, treating `0:00` as a fully elapsed period
    pub fn partial_remaining(&self) -> Option<RemainingTime> {
        self.remaining.filter(|r| !r.is_zero())
    }

    pub fn position(&self) -> TimelinePosition {
        TimelinePosition::new(
            self.period.ordinal(),
            self.remaining.map(|r| r.tenths()).unwrap_or(0),
        )
    }
}

/// Determine where one game's action stops
pub fn game_end_time(game: &Game) -> GameEndTime {
    if game.status.state.is_live() {
        if let Some(progress) = &game.status.progress {
            return live_end_time(game, progress);
        }
    }

    let Some(last_goal) = game.goals.last() else {
        return GameEndTime::regulation_end();
    };

    match last_goal.period {
        Period::Shootout => GameEndTime {
            period: Period::Shootout,
            remaining: None,
            in_progress: false,
        },
        period if period.is_overtime() => {
            let remaining_seconds = (period.length_minutes() * 60).saturating_sub(last_goal.elapsed_seconds());
            GameEndTime {
                period,
                remaining: Some(RemainingTime::new(remaining_seconds / 60, remaining_seconds % 60)),
                in_progress: false,
            }
        }
        _ => GameEndTime::regulation_end(),
    }
}

fn live_end_time(game: &Game, progress: &GameProgress) -> GameEndTime {
    let period = live_period(game, progress);
    let time = &progress.current_period_time_remaining;
    let remaining = if period.is_shootout() || time.is_zero() {
        None
    } else {
        Some(RemainingTime::new(time.min, time.sec))
    };
    GameEndTime {
        period,
        remaining,
        in_progress: true,
    }
}

/// Playoff games can have any number of overtimes and use the numeric
/// period; regular season games past regulation use the feed label
fn live_period(game: &Game, progress: &GameProgress) -> Period {
    if game.is_playoff() || progress.current_period <= REGULATION_PERIODS {
        return Period::Number(progress.current_period.max(1));
    }
    match Period::from_label(&progress.current_period_ordinal) {
        Some(period @ (Period::Overtime | Period::Shootout)) => period,
        _ => Period::Number(progress.current_period),
    }
}

/// Resolve the single furthest clock position reached by any game
///
/// Ties go to the last of the tied games in input order. That choice only
/// matters for the `in_progress` flag and is kept for compatibility.
pub fn resolve_end_time(games: &[Game]) -> Option<GameEndTime> {
    let end_time = games
        .iter()
        .map(game_end_time)
        .max_by_key(|end_time| end_time.position());

    if let Some(end_time) = &end_time {
        debug!(
            "END_TIME: Period {} remaining {:?} in_progress={}",
            end_time.period, end_time.remaining, end_time.in_progress
        );
    }
    end_time
}
