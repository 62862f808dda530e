//! Event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
    /// Event was consumed.
    Consumed,
}

/// Stateless key classification shared by every screen.
pub struct EventHandler;

impl EventHandler {
    /// Checks if key quits from any screen, including text forms.
    #[must_use]
    pub fn is_quit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        )
    }

    /// Checks if the key should be handled at all. Release and repeat
    /// reports are dropped on terminals that emit them.
    #[must_use]
    pub fn is_actionable(key: &KeyEvent) -> bool {
        key.kind == KeyEventKind::Press
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_key_event(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> KeyEvent {
        KeyEvent::new_with_kind(code, modifiers, kind)
    }

    #[test]
    fn test_quit_events() {
        assert!(EventHandler::is_quit_event(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            KeyEventKind::Press
        )));
    }

    #[test]
    fn test_plain_keys_do_not_quit() {
        for code in [KeyCode::Char('q'), KeyCode::Char('c'), KeyCode::Esc] {
            assert!(!EventHandler::is_quit_event(&make_key_event(
                code,
                KeyModifiers::NONE,
                KeyEventKind::Press
            )));
        }
    }

    #[test]
    fn test_release_is_ignored() {
        let release = make_key_event(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release);
        let press = make_key_event(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Press);
        assert!(!EventHandler::is_actionable(&release));
        assert!(EventHandler::is_actionable(&press));
    }
}
