/// Testing utilities for widget rendering
use ratatui::{buffer::Buffer, layout::Rect, style::Color};

use super::RenderableWidget;
use crate::config::ThemeConfig;

/// Theme with a fixed highlight so tests can check styles
pub fn test_theme() -> ThemeConfig {
    ThemeConfig {
        highlight_fg: Color::Rgb(255, 200, 0),
        dimmed_fg: None,
    }
}

/// Render a widget to a buffer and return it for testing
pub fn render_widget(widget: &impl RenderableWidget, width: u16, height: u16) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    widget.render(buf.area, &mut buf, &test_theme());
    buf
}
