/// Fixture snapshot data for testing and development
///
/// This module provides consistent, deterministic fixture data that can be used for:
/// 1. Unit tests - small builders for games and goals
/// 2. Demo mode - running the replay without a snapshot file
/// 3. Benchmarks - providing consistent data for performance testing
///
/// The sample snapshot covers every game state the replay handles: regulation,
/// overtime and shootout finals, a live game, a preview and a postponement.
use chrono::NaiveDate;

use crate::types::{
    Game, GameProgress, GameState, GameStatus, GameType, Goal, Period, Scorer, Snapshot, Team,
    Teams, TimeRemaining,
};

/// Create a game with the given state and goals
pub fn game(away: &str, home: &str, state: GameState, goals: Vec<Goal>) -> Game {
    Game {
        teams: Teams {
            away: Team { abbreviation: away.to_string() },
            home: Team { abbreviation: home.to_string() },
        },
        status: GameStatus { state, progress: None },
        goals,
        game_type: GameType::RegularSeason,
    }
}

/// Create a live game with reported progress
pub fn live_game(
    away: &str,
    home: &str,
    period: u32,
    ordinal: &str,
    min: u32,
    sec: u32,
    goals: Vec<Goal>,
) -> Game {
    let mut live = game(away, home, GameState::Live, goals);
    live.status.progress = Some(GameProgress {
        current_period: period,
        current_period_ordinal: ordinal.to_string(),
        current_period_time_remaining: TimeRemaining {
            min,
            sec,
            pretty: format!("{:02}:{:02}", min, sec),
        },
    });
    live
}

/// Create an unassisted goal in a numbered period
pub fn goal(period: u32, min: u32, sec: u32, team: &str) -> Goal {
    goal_with_assists(period, min, sec, team, &[])
}

/// Create a goal with assists in a numbered period
pub fn goal_with_assists(period: u32, min: u32, sec: u32, team: &str, assists: &[&str]) -> Goal {
    Goal {
        period: Period::Number(period),
        min: Some(min),
        sec: Some(sec),
        team: team.to_string(),
        scorer: Scorer {
            player: format!("{} Scorer", team),
            season_total: Some(1),
        },
        assists: assists
            .iter()
            .map(|player| Scorer {
                player: player.to_string(),
                season_total: Some(1),
            })
            .collect(),
        strength: None,
        empty_net: false,
    }
}

/// Create a shootout goal (no clock)
pub fn shootout_goal(team: &str) -> Goal {
    Goal {
        period: Period::Shootout,
        min: None,
        sec: None,
        team: team.to_string(),
        scorer: Scorer {
            player: format!("{} Shooter", team),
            season_total: None,
        },
        assists: vec![],
        strength: None,
        empty_net: false,
    }
}

fn scored(period: Period, min: u32, sec: u32, team: &str, scorer: &str, total: u32, assists: &[(&str, u32)]) -> Goal {
    Goal {
        period,
        min: Some(min),
        sec: Some(sec),
        team: team.to_string(),
        scorer: Scorer {
            player: scorer.to_string(),
            season_total: Some(total),
        },
        assists: assists
            .iter()
            .map(|(player, total)| Scorer {
                player: player.to_string(),
                season_total: Some(*total),
            })
            .collect(),
        strength: None,
        empty_net: false,
    }
}

fn shootout(team: &str, scorer: &str) -> Goal {
    let mut goal = shootout_goal(team);
    goal.scorer.player = scorer.to_string();
    goal
}

/// Create a full evening of games in various states
pub fn sample_snapshot() -> Snapshot {
    let mut ppg = scored(Period::Number(2), 6, 12, "PIT", "Evgeni Malkin", 14, &[("Kris Letang", 20), ("Sidney Crosby", 31)]);
    ppg.strength = Some("PPG".to_string());
    let mut empty_net = scored(Period::Number(3), 19, 1, "PIT", "Jake Guentzel", 22, &[]);
    empty_net.empty_net = true;

    let regulation = game("PIT", "WSH", GameState::Final, vec![
        scored(Period::Number(1), 8, 44, "PIT", "Sidney Crosby", 18, &[("Jake Guentzel", 25)]),
        scored(Period::Number(1), 15, 2, "WSH", "Alex Ovechkin", 30, &[("Nicklas Backstrom", 33), ("John Carlson", 40)]),
        ppg,
        scored(Period::Number(3), 11, 30, "WSH", "Tom Wilson", 12, &[("Evgeny Kuznetsov", 28)]),
        empty_net,
    ]);

    let overtime = game("TOR", "MTL", GameState::Final, vec![
        scored(Period::Number(1), 3, 30, "MTL", "Nick Suzuki", 9, &[("Cole Caufield", 11)]),
        scored(Period::Number(2), 12, 5, "TOR", "Auston Matthews", 27, &[("Mitch Marner", 35), ("William Nylander", 22)]),
        scored(Period::Overtime, 2, 30, "TOR", "Mitch Marner", 10, &[("Auston Matthews", 19)]),
    ]);

    let shootout_game = game("NYR", "NJD", GameState::Final, vec![
        scored(Period::Number(2), 1, 15, "NJD", "Jack Hughes", 20, &[("Jesper Bratt", 24)]),
        scored(Period::Number(3), 17, 40, "NYR", "Artemi Panarin", 25, &[("Adam Fox", 38)]),
        shootout("NYR", "Artemi Panarin"),
        shootout("NJD", "Jack Hughes"),
        shootout("NYR", "Mika Zibanejad"),
    ]);

    let live = live_game("EDM", "CGY", 2, "2nd", 4, 56, vec![
        scored(Period::Number(1), 4, 21, "EDM", "Connor McDavid", 33, &[("Leon Draisaitl", 41)]),
        scored(Period::Number(2), 9, 8, "CGY", "Nazem Kadri", 15, &[]),
    ]);

    Snapshot {
        date: NaiveDate::from_ymd_opt(2024, 11, 20),
        games: vec![
            regulation,
            overtime,
            shootout_game,
            live,
            game("BOS", "BUF", GameState::Preview, vec![]),
            game("VGK", "LAK", GameState::Postponed, vec![]),
        ],
    }
}
