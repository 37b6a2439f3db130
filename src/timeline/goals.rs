use tracing::debug;

use super::GameGoal;
use crate::types::Game;

/// Collect the goals of every game into one time-sorted list
///
/// Each goal is tagged with its game index and the side that scored.
/// Shootout goals of games that have not finished are dropped. The sort is
/// stable, so simultaneous goals in different games keep input order.
pub fn collect_goals(games: &[Game]) -> Vec<GameGoal> {
    let mut goals: Vec<GameGoal> = games
        .iter()
        .enumerate()
        .flat_map(|(game_index, game)| {
            let finished = game.status.state.is_finished();
            game.goals
                .iter()
                .filter(move |goal| finished || !goal.period.is_shootout())
                .map(move |goal| GameGoal {
                    game_index,
                    side: game.side_of(&goal.team),
                    goal: goal.clone(),
                })
        })
        .collect();

    goals.sort_by_key(|g| (g.goal.period.ordinal(), g.goal.min.unwrap_or(0), g.goal.sec.unwrap_or(0)));

    debug!("GOALS: Collected {} goals from {} games", goals.len(), games.len());
    goals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{game, goal, shootout_goal};
    use crate::types::{GameState, Period, Side};

    #[test]
    fn test_goals_sorted_across_games() {
        let games = vec![
            game("PIT", "WSH", GameState::Final, vec![
                goal(2, 5, 10, "PIT"),
                goal(1, 12, 0, "WSH"),
            ]),
            game("TOR", "MTL", GameState::Final, vec![
                goal(1, 3, 30, "MTL"),
            ]),
        ];

        let goals = collect_goals(&games);
        let order: Vec<(usize, u32)> = goals.iter().map(|g| (g.game_index, g.goal.min.unwrap())).collect();
        assert_eq!(order, vec![(1, 3), (0, 12), (0, 5)]);
    }

    #[test]
    fn test_side_tagging() {
        let games = vec![game("PIT", "WSH", GameState::Final, vec![
            goal(1, 1, 0, "PIT"),
            goal(1, 2, 0, "WSH"),
        ])];

        let goals = collect_goals(&games);
        assert_eq!(goals[0].side, Side::Away);
        assert_eq!(goals[1].side, Side::Home);
    }

    #[test]
    fn test_simultaneous_goals_keep_input_order() {
        let games = vec![
            game("PIT", "WSH", GameState::Final, vec![goal(1, 8, 44, "PIT")]),
            game("TOR", "MTL", GameState::Final, vec![goal(1, 8, 44, "TOR")]),
            game("NYR", "NJD", GameState::Final, vec![goal(1, 8, 44, "NJD")]),
        ];

        let goals = collect_goals(&games);
        let indices: Vec<usize> = goals.iter().map(|g| g.game_index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_overtime_sorts_after_regulation_and_before_shootout() {
        let games = vec![
            game("PIT", "WSH", GameState::Final, vec![
                shootout_goal("PIT"),
                goal_in(Period::Overtime, 2, 0, "WSH"),
                goal(3, 19, 0, "PIT"),
            ]),
        ];

        let periods: Vec<Period> = collect_goals(&games).iter().map(|g| g.goal.period).collect();
        assert_eq!(periods, vec![Period::Number(3), Period::Overtime, Period::Shootout]);
    }

    #[test]
    fn test_unfinished_game_shootout_goals_dropped() {
        let games = vec![
            game("PIT", "WSH", GameState::Live, vec![
                goal(1, 5, 0, "PIT"),
                shootout_goal("PIT"),
            ]),
            game("TOR", "MTL", GameState::Final, vec![shootout_goal("TOR")]),
        ];

        let goals = collect_goals(&games);
        assert_eq!(goals.len(), 2);
        assert_eq!(goals[0].game_index, 0);
        assert_eq!(goals[1].game_index, 1);
        assert_eq!(goals[1].goal.period, Period::Shootout);
    }

    #[test]
    fn test_no_games_no_goals() {
        assert!(collect_goals(&[]).is_empty());
    }

    fn goal_in(period: Period, min: u32, sec: u32, team: &str) -> crate::types::Goal {
        let mut g = goal(1, min, sec, team);
        g.period = period;
        g
    }
}
