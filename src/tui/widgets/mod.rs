/// Widget-based rendering for the replay TUI
///
/// Widgets render themselves directly to a ratatui Buffer so they can be
/// tested against plain buffers without a terminal.

#[cfg(test)]
pub mod testing;

pub mod game_card;
pub use game_card::{GameCard, CARD_HEIGHT, CARD_WIDTH};

pub mod status_bar;
pub use status_bar::{KeyHint, StatusBar};

use ratatui::{buffer::Buffer, layout::Rect};

use crate::config::ThemeConfig;

/// Core trait for renderable widgets
pub trait RenderableWidget {
    /// Render this widget into the provided buffer
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig);
}
