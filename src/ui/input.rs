use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::nav::{PageId, PageParams};
use crate::ui::traits::Action;

/// Global keys, consulted only after the active view declined the event.
pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent) -> Option<Action> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Action::Quit),
            (KeyCode::Char('q'), _) => Some(Action::Quit),
            (KeyCode::Char(' '), _) => Some(Action::PlayPause),
            (KeyCode::Char('+') | KeyCode::Char('='), _) => Some(Action::VolumeUp),
            (KeyCode::Char('-'), _) => Some(Action::VolumeDown),
            (KeyCode::Tab, _) => Some(Action::CycleTab(1)),
            (KeyCode::BackTab, _) => Some(Action::CycleTab(-1)),
            (KeyCode::PageUp, _) => Some(Action::ScrollUp),
            (KeyCode::PageDown, _) => Some(Action::ScrollDown),
            (KeyCode::Char('l'), _) => Some(Action::Navigate(PageId::Login, PageParams::new())),
            (KeyCode::Char('o'), _) => Some(Action::SignOut),
            (KeyCode::Char(c), _) if c.is_ascii_digit() => {
                let n = c.to_digit(10)? as usize;
                (n >= 1).then(|| Action::NavTab(n - 1))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digits_map_to_nav_tabs() {
        assert_eq!(InputHandler::handle_key(key(KeyCode::Char('1'))), Some(Action::NavTab(0)));
        assert_eq!(InputHandler::handle_key(key(KeyCode::Char('6'))), Some(Action::NavTab(5)));
        assert_eq!(InputHandler::handle_key(key(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        assert_eq!(InputHandler::handle_key(key(KeyCode::Char('z'))), None);
    }
}
