/// Running per-game score during playback
///
/// Goals are counted as their goal updates are emitted, so each card shows
/// the score at the shared clock's current position rather than the final.
use crate::timeline::{Event, GameGoal, UpdateKind};
use crate::types::Side;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameScore {
    pub away: u32,
    pub home: u32,
    /// Goals shown so far, in order of appearance
    pub goals: Vec<GameGoal>,
}

impl GameScore {
    fn add(&mut self, goal: &GameGoal) {
        match goal.side {
            Side::Away => self.away += 1,
            Side::Home => self.home += 1,
        }
        self.goals.push(goal.clone());
    }

    pub fn latest_goal(&self) -> Option<&GameGoal> {
        self.goals.last()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreboard {
    games: Vec<GameScore>,
}

impl Scoreboard {
    pub fn new(game_count: usize) -> Self {
        Self {
            games: vec![GameScore::default(); game_count],
        }
    }

    /// Update scores for an emitted event; only goal updates count
    pub fn apply(&mut self, event: &Event) {
        if let Event::GameUpdate(update) = event {
            if update.kind == UpdateKind::Goal {
                if let Some(score) = self.games.get_mut(update.game_index) {
                    score.add(&update.goal);
                }
            }
        }
    }

    pub fn game(&self, game_index: usize) -> Option<&GameScore> {
        self.games.get(game_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{game, goal};
    use crate::timeline::{build_timeline, Pacing};
    use crate::types::GameState;

    #[test]
    fn test_counts_goal_updates_once() {
        let games = vec![
            game("PIT", "WSH", GameState::Final, vec![goal(1, 5, 0, "PIT"), goal(2, 5, 0, "WSH"), goal(3, 1, 0, "PIT")]),
            game("TOR", "MTL", GameState::Final, vec![]),
        ];
        let events = build_timeline(&games, &Pacing::default());

        let mut scoreboard = Scoreboard::new(games.len());
        for event in &events {
            scoreboard.apply(event);
        }

        let score = scoreboard.game(0).unwrap();
        assert_eq!((score.away, score.home), (2, 1));
        assert_eq!(score.goals.len(), 3);
        assert_eq!(score.latest_goal().unwrap().goal.period, crate::types::Period::Number(3));
        assert_eq!(scoreboard.game(1), Some(&GameScore::default()));
    }

    #[test]
    fn test_score_at_intermediate_position() {
        let games = vec![game("PIT", "WSH", GameState::Final, vec![goal(1, 5, 0, "PIT"), goal(2, 5, 0, "WSH")])];
        let events = build_timeline(&games, &Pacing::default());

        let mut scoreboard = Scoreboard::new(1);
        for event in events.iter().take_while(|e| !matches!(e, Event::PeriodEnd { .. })) {
            scoreboard.apply(event);
        }
        let score = scoreboard.game(0).unwrap();
        assert_eq!((score.away, score.home), (1, 0));
    }
}
