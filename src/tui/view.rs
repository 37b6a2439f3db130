use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    Frame,
};

use crate::config::ThemeConfig;
use crate::formatting::{format_clock, format_event, format_position, period_label};
use crate::replay::Replay;
use crate::timeline::Event;

use super::state::AppState;
use super::widgets::{GameCard, RenderableWidget, StatusBar, CARD_HEIGHT, CARD_WIDTH};

/// Horizontal gap between game cards
const CARD_GAP: u16 = 1;

/// Render the whole screen: header, game grid and status bar
pub fn draw(frame: &mut Frame, state: &AppState) {
    let [header_area, grid_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let theme = &state.system.config.theme;
    let buf = frame.buffer_mut();

    render_header(header_area, buf, state, theme);
    if let Some(replay) = &state.replay {
        render_grid(grid_area, buf, replay, state, theme);
    }

    StatusBar::new(state.system.source.clone())
        .with_error(state.system.error_message.clone())
        .with_last_refresh(state.system.last_refresh, state.system.config.refresh_interval)
        .render(status_area, buf, theme);
}

fn render_header(area: Rect, buf: &mut Buffer, state: &AppState, theme: &ThemeConfig) {
    let Some(replay) = &state.replay else {
        buf.set_string(area.x, area.y, " NHL REPLAY │ Loading...", Style::default());
        return;
    };

    let date = replay
        .snapshot()
        .date
        .map(|date| format!(" {}", date.format("%Y-%m-%d")))
        .unwrap_or_default();
    let playback = if replay.is_finished() {
        "Finished"
    } else if replay.is_playing() {
        "Playing"
    } else {
        "Paused"
    };
    let text = format!(" NHL REPLAY{} │ {} │ {}", date, current_label(replay), playback);
    let style = Style::default().fg(theme.highlight_fg).add_modifier(Modifier::BOLD);
    buf.set_stringn(area.x, area.y, text, area.width as usize, style);
}

/// Short description of where playback is
fn current_label(replay: &Replay) -> String {
    match replay.current() {
        None => "Ready".to_string(),
        Some(Event::Clock(clock)) => format!("{} {}", period_label(clock.period), format_clock(clock)),
        Some(Event::GameUpdate(update)) => format_position(&update.at),
        Some(event) => format_event(event, &replay.snapshot().games).unwrap_or_default(),
    }
}

fn render_grid(area: Rect, buf: &mut Buffer, replay: &Replay, state: &AppState, theme: &ThemeConfig) {
    let per_row = (area.width / (CARD_WIDTH + CARD_GAP)).max(1);
    let games = &replay.snapshot().games;

    for (index, game) in games.iter().enumerate() {
        let row = index as u16 / per_row;
        let col = index as u16 % per_row;
        let x = area.x + col * (CARD_WIDTH + CARD_GAP);
        let y = area.y + row * CARD_HEIGHT;
        if y + CARD_HEIGHT > area.bottom() || x + CARD_WIDTH > area.right() {
            continue;
        }

        let Some(phase) = replay.phases().get(index).copied() else {
            continue;
        };
        let card = GameCard::new(game, phase, replay.scoreboard().game(index)).with_highlight(
            state.highlights.is_focused(index),
            state.highlights.is_flashing(index),
        );
        card.render(Rect::new(x, y, CARD_WIDTH, CARD_HEIGHT), buf, theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::fixtures::sample_snapshot;
    use crate::tui::action::Action;
    use crate::tui::reducer::reduce;
    use crate::tui::testing::buffer_lines;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(state: &AppState, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, state)).unwrap();
        buffer_lines(terminal.backend().buffer())
    }

    #[test]
    fn test_loading_screen() {
        let state = AppState::new(Config::default(), "scores.json".to_string());
        let lines = render(&state, 80, 10);
        assert!(lines[0].starts_with(" NHL REPLAY │ Loading..."));
        assert!(lines[9].starts_with(" scores.json"));
    }

    #[test]
    fn test_grid_of_cards() {
        let state = AppState::new(Config::default(), "demo fixtures".to_string());
        let (state, _) = reduce(state, Action::SnapshotLoaded(sample_snapshot()));
        let lines = render(&state, 100, 20);

        assert!(lines[0].starts_with(" NHL REPLAY 2024-11-20 │ Ready │ Paused"));
        // Three cards per row at this width
        assert!(lines[1].starts_with("┌ PIT @ WSH "));
        assert!(lines[1].contains("┌ TOR @ MTL "));
        assert!(lines[1].contains("┌ NYR @ NJD "));
        assert!(lines[7].starts_with("┌ EDM @ CGY "));
        assert!(lines[7].contains("┌ VGK @ LAK "));
        assert!(lines[10].contains("Postponed"));
    }

    #[test]
    fn test_header_follows_playback() {
        let state = AppState::new(Config::default(), "demo fixtures".to_string());
        let (state, _) = reduce(state, Action::SnapshotLoaded(sample_snapshot()));
        let (state, _) = reduce(state, Action::TogglePlay);
        let (state, _) = reduce(state, Action::Tick);
        let lines = render(&state, 100, 20);
        assert!(lines[0].contains("│ START │ Playing"));

        let (state, _) = reduce(state, Action::Tick);
        let lines = render(&state, 100, 20);
        assert!(lines[0].contains("│ START │"), "pause ticks keep the last visible event");
    }
}
