pub mod action;
pub mod error;
pub mod highlights;
pub mod keys;
pub mod reducer;
pub mod state;
pub mod view;
pub mod widgets;

#[cfg(test)]
pub mod testing;

pub use action::Action;
pub use error::{TuiError, TuiResult};
pub use keys::key_to_action;
pub use reducer::{reduce, Effect};
pub use state::AppState;

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::debug;

use crate::background::RefreshMessage;
use crate::config::Config;

/// Main entry point for TUI mode
///
/// Snapshots arrive on `snapshots`; a manual refresh request is sent on
/// `refresh_tx`.
pub async fn run(
    config: Config,
    source: String,
    mut snapshots: mpsc::Receiver<RefreshMessage>,
    refresh_tx: mpsc::Sender<()>,
) -> TuiResult<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, config, source, &mut snapshots, &refresh_tx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: Config,
    source: String,
    snapshots: &mut mpsc::Receiver<RefreshMessage>,
    refresh_tx: &mpsc::Sender<()>,
) -> TuiResult<()> {
    let tick_interval = Duration::from_millis(config.tick_interval_ms.max(1));
    let mut state = AppState::new(config, source);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| view::draw(f, &state))?;

        let mut actions = Vec::new();
        while let Ok(message) = snapshots.try_recv() {
            actions.push(match message {
                RefreshMessage::Snapshot(snapshot) => Action::SnapshotLoaded(snapshot),
                RefreshMessage::Error(e) => Action::RefreshFailed(e),
            });
        }

        let timeout = tick_interval.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                actions.extend(key_to_action(key));
            }
        }
        if last_tick.elapsed() >= tick_interval {
            actions.push(Action::Tick);
            last_tick = Instant::now();
        }

        for action in actions {
            let (next, effect) = reduce(state, action);
            state = next;
            match effect {
                Effect::None => {}
                Effect::Refresh => {
                    debug!("ACTION: Manual refresh requested");
                    if let Err(e @ TrySendError::Closed(_)) = refresh_tx.try_send(()) {
                        return Err(e.into());
                    }
                }
                Effect::Quit => {
                    debug!("ACTION: Quitting application");
                    return Ok(());
                }
            }
        }
    }
}
