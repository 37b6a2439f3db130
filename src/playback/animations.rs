use tracing::info;

use crate::timeline::{GameGoal, GameUpdate, UpdateKind};

/// Presentation side effects triggered by game updates
///
/// The core never touches presentation state; front ends implement this
/// and receive every `GameUpdate` the cursor emits.
pub trait Animations {
    /// A game gains focus
    fn highlight_game_start(&mut self, game_index: usize);

    /// A goal changes a game's scoreboard
    fn highlight_goal(&mut self, game_index: usize, goal: &GameGoal);

    /// A game loses focus
    fn highlight_game_end(&mut self, game_index: usize);
}

/// Route a game update to the matching animation
pub fn dispatch_update(animations: &mut dyn Animations, update: &GameUpdate) {
    match update.kind {
        UpdateKind::Start => animations.highlight_game_start(update.game_index),
        UpdateKind::Goal => animations.highlight_goal(update.game_index, &update.goal),
        UpdateKind::End => animations.highlight_game_end(update.game_index),
    }
}

/// Animations that only log, for headless playback
#[derive(Debug, Default)]
pub struct LogAnimations;

impl Animations for LogAnimations {
    fn highlight_game_start(&mut self, game_index: usize) {
        info!("ANIMATION: Focus game {}", game_index);
    }

    fn highlight_goal(&mut self, game_index: usize, goal: &GameGoal) {
        info!(
            "ANIMATION: Goal in game {} by {} ({})",
            game_index, goal.goal.scorer.player, goal.goal.team
        );
    }

    fn highlight_game_end(&mut self, game_index: usize) {
        info!("ANIMATION: Unfocus game {}", game_index);
    }
}
