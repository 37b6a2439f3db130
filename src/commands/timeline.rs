use anyhow::{Context, Result};

use crate::commands::{header, load_snapshot};
use crate::data_provider::SnapshotProvider;
use crate::formatting::{format_end_time, format_event};
use crate::timeline::{build_timeline, resolve_end_time, Event, Pacing};
use crate::types::Snapshot;

pub async fn run(provider: &dyn SnapshotProvider, pacing: &Pacing, json: bool) -> Result<()> {
    let snapshot = load_snapshot(provider).await?;
    let events = build_timeline(&snapshot.games, pacing);

    if json {
        let text = serde_json::to_string_pretty(&events).context("Failed to serialize timeline")?;
        println!("{}", text);
        return Ok(());
    }

    println!("{}", header("NHL REPLAY TIMELINE", &snapshot));
    for line in render(&snapshot, &events) {
        println!("{}", line);
    }
    Ok(())
}

/// Visible timeline lines followed by a pause count summary
pub fn render(snapshot: &Snapshot, events: &[Event]) -> Vec<String> {
    let mut lines: Vec<String> = events
        .iter()
        .filter_map(|event| format_event(event, &snapshot.games))
        .collect();

    let pauses = events.iter().filter(|e| e.is_pause()).count();
    lines.push(String::new());
    if let Some(end_time) = resolve_end_time(&snapshot.games) {
        lines.push(format!("Clock stops at: {}", format_end_time(&end_time)));
    }
    lines.push(format!(
        "{} events ({} visible, {} pause ticks)",
        events.len(),
        events.len() - pauses,
        pauses
    ));
    lines
}
