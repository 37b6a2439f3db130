/// StatusBar widget - snapshot source, errors and keyboard hints on one line
///
/// Left: error message (in the highlight color) or the snapshot source.
/// Right: key hints followed by the countdown to the next refresh.
use std::time::SystemTime;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::config::ThemeConfig;

use super::RenderableWidget;

/// Represents a keyboard hint displayed in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    pub key: String,
    pub action: String,
}

impl KeyHint {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatusBar {
    pub source: String,
    pub error_message: Option<String>,
    pub last_refresh: Option<SystemTime>,
    /// Refresh interval in seconds
    pub refresh_interval: u32,
    pub hints: Vec<KeyHint>,
}

impl StatusBar {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            error_message: None,
            last_refresh: None,
            refresh_interval: 60,
            hints: vec![
                KeyHint::new("space", "Play/Pause"),
                KeyHint::new("b", "Restart"),
                KeyHint::new("r", "Refresh"),
                KeyHint::new("q", "Quit"),
            ],
        }
    }

    pub fn with_error(mut self, error: Option<String>) -> Self {
        self.error_message = error;
        self
    }

    pub fn with_last_refresh(mut self, last_refresh: Option<SystemTime>, refresh_interval: u32) -> Self {
        self.last_refresh = last_refresh;
        self.refresh_interval = refresh_interval;
        self
    }

    fn left_text(&self) -> String {
        match &self.error_message {
            Some(msg) => format!(" ERROR: {}", msg),
            None => format!(" {}", self.source),
        }
    }

    /// Hints and refresh countdown (fixed 3-char width, right-aligned)
    fn right_text(&self) -> String {
        let hints: Vec<String> = self
            .hints
            .iter()
            .map(|hint| format!("{} {}", hint.key, hint.action))
            .collect();
        let countdown = match self.last_refresh {
            Some(refresh_time) => match SystemTime::now().duration_since(refresh_time) {
                Ok(elapsed) => {
                    let remaining = self.refresh_interval.saturating_sub(elapsed.as_secs() as u32);
                    if remaining > 0 {
                        format!("{:>3}", remaining.min(999))
                    } else {
                        "...".to_string()
                    }
                }
                Err(_) => "  ?".to_string(),
            },
            None => "---".to_string(),
        };
        format!("{} │ {} ", hints.join("  "), countdown)
    }
}

impl RenderableWidget for StatusBar {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig) {
        if area.height == 0 {
            return;
        }
        let width = area.width as usize;
        let right = self.right_text();
        let right_len = right.chars().count();

        let left_style = if self.error_message.is_some() {
            Style::default().fg(theme.highlight_fg).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let left_width = width.saturating_sub(right_len + 1);
        buf.set_stringn(area.x, area.y, self.left_text(), left_width, left_style);

        if right_len <= width {
            let x = area.x + (width - right_len) as u16;
            buf.set_string(x, area.y, &right, Style::default());
        }
    }
}
