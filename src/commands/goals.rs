use anyhow::Result;

use crate::commands::{header, load_snapshot};
use crate::data_provider::SnapshotProvider;
use crate::formatting::{format_end_time, format_game_goal, matchup};
use crate::timeline::{collect_goals, game_end_time, resolve_end_time};
use crate::types::Snapshot;

pub async fn run(provider: &dyn SnapshotProvider) -> Result<()> {
    let snapshot = load_snapshot(provider).await?;
    println!("{}", header("NHL REPLAY GOALS", &snapshot));
    for line in render(&snapshot) {
        println!("{}", line);
    }
    Ok(())
}

/// Goals in replay order, where each game's clock stops and where the
/// shared clock stops
pub fn render(snapshot: &Snapshot) -> Vec<String> {
    let goals = collect_goals(&snapshot.games);
    let mut lines = Vec::with_capacity(goals.len() + snapshot.games.len() + 2);

    if goals.is_empty() {
        lines.push("No goals scored.".to_string());
    }
    for goal in &goals {
        lines.push(format_game_goal(goal));
    }

    lines.push(String::new());
    for game in &snapshot.games {
        let status = if game.status.state.has_started() {
            format_end_time(&game_end_time(game))
        } else {
            game.status.state.to_string()
        };
        lines.push(format!("{:<11} {}", matchup(game), status));
    }

    if let Some(end_time) = resolve_end_time(&snapshot.games) {
        lines.push(String::new());
        lines.push(format!("Clock stops at: {}", format_end_time(&end_time)));
    }
    lines
}
