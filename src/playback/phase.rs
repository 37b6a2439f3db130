use serde::Serialize;

use crate::timeline::{end_time, Event};
use crate::types::{Game, GameState};

/// What a game card should currently present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayPhase {
    PreGame,
    MidPlayback,
    CaughtUpInProgress,
    PreSummaryFinished,
    PreSummaryInProgress,
    SummaryFinished,
    SummaryInProgress,
    PostGameFinished,
    PostGameInProgress,
}

/// Derive one game's display phase from the cursor's current event
///
/// # Panics
///
/// Panics when handed a `Pause`: the cursor never reports pauses, so one
/// reaching this point means the timeline and its consumer disagree.
pub fn display_phase(event: &Event, game: &Game) -> DisplayPhase {
    if matches!(game.status.state, GameState::Preview | GameState::Postponed) {
        return DisplayPhase::PreGame;
    }
    let finished = game.status.state.is_finished();

    match event {
        Event::Start | Event::Clock(_) | Event::GameUpdate(_) | Event::PeriodEnd { .. } => {
            if caught_up(event, game) {
                DisplayPhase::CaughtUpInProgress
            } else {
                DisplayPhase::MidPlayback
            }
        }
        Event::PreSummary { .. } if finished => DisplayPhase::PreSummaryFinished,
        Event::PreSummary { .. } => DisplayPhase::PreSummaryInProgress,
        Event::Summary { .. } if finished => DisplayPhase::SummaryFinished,
        Event::Summary { .. } => DisplayPhase::SummaryInProgress,
        Event::End { .. } if finished => DisplayPhase::PostGameFinished,
        Event::End { .. } => DisplayPhase::PostGameInProgress,
        Event::Pause => panic!("pause event reached the display phase mapper"),
    }
}

/// Phases of every game for the cursor's current event
pub fn display_phases(event: &Event, games: &[Game]) -> Vec<DisplayPhase> {
    games.iter().map(|game| display_phase(event, game)).collect()
}

/// A live game is caught up once the shared clock reaches its own progress
fn caught_up(event: &Event, game: &Game) -> bool {
    if !game.status.state.is_live() || game.status.progress.is_none() {
        return false;
    }
    match event.position() {
        Some(position) => position >= end_time::game_end_time(game).position(),
        None => false,
    }
}
