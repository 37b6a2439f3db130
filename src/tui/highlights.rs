use std::collections::{BTreeSet, HashMap};

use crate::playback::Animations;
use crate::timeline::GameGoal;

/// Ticks a goal flash stays on a card
const GOAL_FLASH_TICKS: usize = 40;

/// Card highlight state driven by game updates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlights {
    focused: BTreeSet<usize>,
    /// Game index to remaining flash ticks
    flashing: HashMap<usize, usize>,
}

impl Highlights {
    pub fn is_focused(&self, game_index: usize) -> bool {
        self.focused.contains(&game_index)
    }

    pub fn is_flashing(&self, game_index: usize) -> bool {
        self.flashing.contains_key(&game_index)
    }

    /// Age goal flashes by one tick
    pub fn tick(&mut self) {
        self.flashing.retain(|_, ticks| {
            *ticks = ticks.saturating_sub(1);
            *ticks > 0
        });
    }

    pub fn clear(&mut self) {
        self.focused.clear();
        self.flashing.clear();
    }
}

impl Animations for Highlights {
    fn highlight_game_start(&mut self, game_index: usize) {
        self.focused.insert(game_index);
    }

    fn highlight_goal(&mut self, game_index: usize, _goal: &GameGoal) {
        self.flashing.insert(game_index, GOAL_FLASH_TICKS);
    }

    fn highlight_game_end(&mut self, game_index: usize) {
        self.focused.remove(&game_index);
    }
}
