/// Keyboard event to action mapping
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::trace;

use super::action::Action;

pub fn key_to_action(key: KeyEvent) -> Option<Action> {
    trace!("KEY: {:?}", key);
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(' ') | KeyCode::Char('p') => Some(Action::TogglePlay),
        KeyCode::Char('r') => Some(Action::Refresh),
        KeyCode::Char('b') | KeyCode::Home => Some(Action::Restart),
        _ => None,
    }
}
