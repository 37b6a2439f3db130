/// GameCard widget - one game's replayed score in a bordered box
///
/// Fixed dimensions: 32 columns × 6 rows (border, two team rows, status, last goal)
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Widget},
};

use crate::config::ThemeConfig;
use crate::formatting::{format_end_time, format_goal, matchup, period_label};
use crate::playback::DisplayPhase;
use crate::scoreboard::GameScore;
use crate::team_abbrev::display_name;
use crate::timeline::game_end_time;
use crate::types::{Game, Period};

use super::RenderableWidget;

pub const CARD_WIDTH: u16 = 32;
pub const CARD_HEIGHT: u16 = 6;

/// Width of the team name column
const NAME_WIDTH: usize = 21;

#[derive(Debug, Clone, PartialEq)]
pub struct GameCard {
    pub title: String,
    pub away: String,
    pub home: String,
    /// None until the game has anything to show
    pub score: Option<(u32, u32)>,
    pub status: String,
    pub latest_goal: Option<String>,
    pub focused: bool,
    pub flashing: bool,
    pub dimmed: bool,
}

impl GameCard {
    pub fn new(game: &Game, phase: DisplayPhase, score: Option<&GameScore>) -> Self {
        let pre_game = phase == DisplayPhase::PreGame;
        Self {
            title: format!(" {} ", matchup(game)),
            away: game.teams.away.abbreviation.clone(),
            home: game.teams.home.abbreviation.clone(),
            score: match score {
                Some(score) if !pre_game => Some((score.away, score.home)),
                _ => None,
            },
            status: phase_status(phase, game),
            latest_goal: score
                .and_then(|score| score.latest_goal())
                .map(|goal| format!("{} {}", goal.goal.team, format_goal(&goal.goal))),
            focused: false,
            flashing: false,
            dimmed: pre_game,
        }
    }

    pub fn with_highlight(mut self, focused: bool, flashing: bool) -> Self {
        self.focused = focused;
        self.flashing = flashing;
        self
    }

    fn team_line(&self, abbrev: &str, score: Option<u32>) -> String {
        let score = score.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string());
        format!(" {:<3} {:<width$}{:>3}", abbrev, display_name(abbrev), score, width = NAME_WIDTH)
    }
}

/// Status line for a card in the given phase
pub fn phase_status(phase: DisplayPhase, game: &Game) -> String {
    match phase {
        DisplayPhase::PreGame => game.status.state.to_string(),
        DisplayPhase::MidPlayback => "Replaying".to_string(),
        DisplayPhase::CaughtUpInProgress => "Caught up - live".to_string(),
        DisplayPhase::PreSummaryFinished | DisplayPhase::SummaryFinished => "Final - summary".to_string(),
        DisplayPhase::PreSummaryInProgress | DisplayPhase::SummaryInProgress => {
            "In progress - summary".to_string()
        }
        DisplayPhase::PostGameFinished => {
            let period = game_end_time(game).period;
            if period == Period::Shootout || period.is_overtime() {
                format!("Final/{}", period_label(period))
            } else {
                "Final".to_string()
            }
        }
        DisplayPhase::PostGameInProgress => format!("Live {}", format_end_time(&game_end_time(game))),
    }
}

impl RenderableWidget for GameCard {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig) {
        if area.height < CARD_HEIGHT || area.width < CARD_WIDTH {
            return; // Not enough space
        }
        let area = Rect::new(area.x, area.y, CARD_WIDTH, CARD_HEIGHT);

        let border_style = if self.focused {
            Style::default().fg(theme.highlight_fg)
        } else if self.dimmed {
            Style::default().fg(theme.dimmed_fg())
        } else {
            Style::default()
        };
        let score_style = if self.flashing {
            Style::default().fg(theme.highlight_fg).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let block = Block::bordered().title(self.title.as_str()).border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width as usize;
        let rows = [
            (self.team_line(&self.away, self.score.map(|s| s.0)), score_style),
            (self.team_line(&self.home, self.score.map(|s| s.1)), score_style),
            (format!(" {}", self.status), Style::default()),
            (
                format!(" {}", self.latest_goal.as_deref().unwrap_or("")),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ];
        for (offset, (text, style)) in rows.iter().enumerate() {
            buf.set_stringn(inner.x, inner.y + offset as u16, text, width, *style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{game, live_game, sample_snapshot};
    use crate::tui::testing::buffer_lines;
    use crate::tui::widgets::testing::*;
    use crate::types::GameState;

    #[test]
    fn test_pre_game_card() {
        let preview = game("BOS", "BUF", GameState::Preview, vec![]);
        let card = GameCard::new(&preview, DisplayPhase::PreGame, None);
        assert!(card.dimmed);
        assert_eq!(card.score, None);

        let buf = render_widget(&card, CARD_WIDTH, CARD_HEIGHT);
        let lines = buffer_lines(&buf);
        assert!(lines[0].starts_with("┌ BOS @ BUF ─"));
        assert!(lines[1].starts_with("│ BOS Bruins"));
        assert!(lines[1].contains("  -"));
        assert!(lines[3].starts_with("│ Preview"));
        assert!(lines[5].starts_with("└"));
    }

    #[test]
    fn test_card_shows_running_score_and_latest_goal() {
        let snapshot = sample_snapshot();
        let score = GameScore { away: 1, ..GameScore::default() };
        let card = GameCard::new(&snapshot.games[0], DisplayPhase::MidPlayback, Some(&score))
            .with_highlight(true, true);
        assert_eq!(card.score, Some((1, 0)));
        assert_eq!(card.latest_goal, None);

        let buf = render_widget(&card, CARD_WIDTH, CARD_HEIGHT);
        let lines = buffer_lines(&buf);
        assert!(lines[1].starts_with("│ PIT Penguins"));
        assert!(lines[1].trim_end_matches('│').trim_end().ends_with('1'));
        assert!(lines[3].starts_with("│ Replaying"));
        assert_eq!(buf[(0, 0)].fg, test_theme().highlight_fg);
        assert!(buf[(29, 1)].modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_post_game_status() {
        let snapshot = sample_snapshot();
        assert_eq!(phase_status(DisplayPhase::PostGameFinished, &snapshot.games[0]), "Final");
        assert_eq!(phase_status(DisplayPhase::PostGameFinished, &snapshot.games[1]), "Final/OT");
        assert_eq!(phase_status(DisplayPhase::PostGameFinished, &snapshot.games[2]), "Final/SO");

        let live = live_game("EDM", "CGY", 2, "2nd", 4, 56, vec![]);
        assert_eq!(
            phase_status(DisplayPhase::PostGameInProgress, &live),
            "Live 2nd 4:56 remaining (in progress)"
        );
    }

    #[test]
    fn test_too_small_area_renders_nothing() {
        let preview = game("BOS", "BUF", GameState::Preview, vec![]);
        let card = GameCard::new(&preview, DisplayPhase::PreGame, None);
        let buf = render_widget(&card, CARD_WIDTH - 1, CARD_HEIGHT);
        assert!(buffer_lines(&buf).iter().all(|line| line.trim().is_empty()));
    }
}
