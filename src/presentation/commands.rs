use crate::domain::keybinding::{Action, Keybind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;
use tracing::{debug, warn};

pub struct CommandRegistry {
    display_bindings: HashMap<Action, KeyEvent>,
    input_bindings: Vec<(KeyEvent, Action)>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        let mut display_bindings = HashMap::new();
        let mut input_bindings = Vec::new();

        let mut register = |action: Action, key: KeyEvent, is_primary: bool| {
            if is_primary {
                display_bindings.insert(action, key);
            }
            input_bindings.push((key, action));
        };

        register(
            Action::Quit,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            true,
        );
        register(
            Action::Quit,
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            false,
        );
        register(
            Action::Logout,
            KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL),
            true,
        );

        register(
            Action::NextTab,
            KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
            true,
        );
        register(
            Action::PreviousTab,
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            true,
        );
        register(
            Action::GoHome,
            KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE),
            true,
        );
        register(
            Action::GoBooking,
            KeyEvent::new(KeyCode::Char('2'), KeyModifiers::NONE),
            true,
        );
        register(
            Action::GoHistory,
            KeyEvent::new(KeyCode::Char('3'), KeyModifiers::NONE),
            true,
        );
        register(
            Action::GoProfile,
            KeyEvent::new(KeyCode::Char('4'), KeyModifiers::NONE),
            true,
        );

        register(
            Action::NavigateUp,
            KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            true,
        );
        register(
            Action::NavigateUp,
            KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE),
            false,
        );
        register(
            Action::NavigateDown,
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            true,
        );
        register(
            Action::NavigateDown,
            KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE),
            false,
        );
        register(
            Action::SelectFirst,
            KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
            true,
        );
        register(
            Action::SelectFirst,
            KeyEvent::new(KeyCode::Home, KeyModifiers::NONE),
            false,
        );
        register(
            Action::SelectLast,
            KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT),
            true,
        );
        register(
            Action::SelectLast,
            KeyEvent::new(KeyCode::End, KeyModifiers::NONE),
            false,
        );

        register(
            Action::Select,
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            true,
        );
        register(
            Action::Select,
            KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE),
            false,
        );
        register(
            Action::Cancel,
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            true,
        );

        Self {
            display_bindings,
            input_bindings,
        }
    }
}

impl CommandRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the default registry with user overrides from the
    /// `[keybindings]` table. Overrides win over defaults for the same key.
    #[must_use]
    pub fn with_overrides(overrides: &HashMap<String, Action>) -> Self {
        let mut registry = Self::default();
        let mut specs: Vec<_> = overrides.iter().collect();
        specs.sort_by(|a, b| a.0.cmp(b.0));

        for (spec, action) in specs {
            match parse_key_spec(spec) {
                Some(key) => {
                    debug!(key = %spec, action = ?action, "Keybinding override");
                    registry.bind(key, *action);
                }
                None => warn!(key = %spec, "Ignoring unparsable keybinding"),
            }
        }
        registry
    }

    /// Binds `key` to `action` ahead of any existing binding for that key.
    pub fn bind(&mut self, key: KeyEvent, action: Action) {
        self.input_bindings.insert(0, (key, action));
        self.display_bindings.insert(action, key);
    }

    #[must_use]
    pub fn get(&self, action: Action) -> Option<KeyEvent> {
        self.display_bindings.get(&action).copied()
    }

    #[must_use]
    pub fn find_action(&self, key: KeyEvent) -> Option<Action> {
        let wanted = normalize(key);
        self.input_bindings
            .iter()
            .find(|(k, _)| normalize(*k) == wanted)
            .map(|(_, a)| *a)
    }

    /// Footer entry for `action` under its primary key, if it has one.
    #[must_use]
    pub fn keybind(&self, action: Action, label: &'static str) -> Option<Keybind> {
        self.get(action).map(|key| Keybind::new(key, action, label))
    }
}

/// Character keys compare without SHIFT since terminals disagree on
/// reporting it alongside an uppercase char.
fn normalize(key: KeyEvent) -> (KeyCode, KeyModifiers) {
    match key.code {
        KeyCode::Char(_) => (key.code, key.modifiers - KeyModifiers::SHIFT),
        KeyCode::BackTab => (key.code, KeyModifiers::NONE),
        _ => (key.code, key.modifiers),
    }
}

/// Parses a key description such as `Ctrl+q`, `Shift+Tab`, `F5` or `G`.
#[must_use]
pub fn parse_key_spec(spec: &str) -> Option<KeyEvent> {
    let mut modifiers = KeyModifiers::NONE;
    let mut parts: Vec<&str> = spec.split('+').map(str::trim).collect();
    // "Ctrl++" names the plus key
    if spec.ends_with("++") {
        parts.truncate(parts.len().saturating_sub(2));
        parts.push("+");
    }
    let key = parts.pop().filter(|k| !k.is_empty())?;

    for modifier in parts {
        match modifier.to_ascii_lowercase().as_str() {
            "ctrl" | "control" | "c" => modifiers |= KeyModifiers::CONTROL,
            "alt" | "a" => modifiers |= KeyModifiers::ALT,
            "shift" | "s" => modifiers |= KeyModifiers::SHIFT,
            _ => return None,
        }
    }

    let code = match key.to_ascii_lowercase().as_str() {
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" if modifiers.contains(KeyModifiers::SHIFT) => KeyCode::BackTab,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "space" => KeyCode::Char(' '),
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        lower => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => {
                    if c.is_uppercase() {
                        modifiers |= KeyModifiers::SHIFT;
                    }
                    if modifiers.contains(KeyModifiers::SHIFT) {
                        KeyCode::Char(c.to_ascii_uppercase())
                    } else {
                        KeyCode::Char(c)
                    }
                }
                _ => {
                    let n = lower.strip_prefix('f')?.parse::<u8>().ok()?;
                    if !(1..=12).contains(&n) {
                        return None;
                    }
                    KeyCode::F(n)
                }
            }
        }
    };

    Some(KeyEvent::new(code, modifiers))
}

pub trait HasCommands {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Ctrl+q", KeyCode::Char('q'), KeyModifiers::CONTROL ; "ctrl_char")]
    #[test_case("ctrl+Q", KeyCode::Char('Q'), KeyModifiers::CONTROL.union(KeyModifiers::SHIFT) ; "ctrl_upper")]
    #[test_case("G", KeyCode::Char('G'), KeyModifiers::SHIFT ; "upper_implies_shift")]
    #[test_case("Shift+Tab", KeyCode::BackTab, KeyModifiers::SHIFT ; "backtab")]
    #[test_case("Enter", KeyCode::Enter, KeyModifiers::NONE ; "named")]
    #[test_case("Alt+F5", KeyCode::F(5), KeyModifiers::ALT ; "function_key")]
    #[test_case("space", KeyCode::Char(' '), KeyModifiers::NONE ; "space")]
    #[test_case("Ctrl++", KeyCode::Char('+'), KeyModifiers::CONTROL ; "plus")]
    fn test_parse_key_spec(spec: &str, code: KeyCode, modifiers: KeyModifiers) {
        assert_eq!(parse_key_spec(spec), Some(KeyEvent::new(code, modifiers)));
    }

    #[test_case("" ; "empty")]
    #[test_case("Hyper+x" ; "unknown_modifier")]
    #[test_case("F13" ; "out_of_range")]
    #[test_case("ab" ; "word")]
    #[test_case("Ctrl+" ; "missing_key")]
    fn test_parse_key_spec_rejects(spec: &str) {
        assert_eq!(parse_key_spec(spec), None);
    }

    #[test]
    fn test_default_bindings() {
        let registry = CommandRegistry::new();
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(
            registry.find_action(key(KeyCode::Char('2'))),
            Some(Action::GoBooking)
        );
        assert_eq!(registry.find_action(key(KeyCode::Char('j'))), Some(Action::NavigateDown));
        assert_eq!(registry.find_action(key(KeyCode::Enter)), Some(Action::Select));
        assert_eq!(registry.find_action(key(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_uppercase_matches_with_or_without_shift() {
        let registry = CommandRegistry::new();
        let shifted = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT);
        let plain = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::NONE);
        assert_eq!(registry.find_action(shifted), Some(Action::SelectLast));
        assert_eq!(registry.find_action(plain), Some(Action::SelectLast));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let overrides = HashMap::from([
            ("Ctrl+q".to_string(), Action::Quit),
            ("j".to_string(), Action::NavigateUp),
            ("Bogus+x".to_string(), Action::Logout),
        ]);
        let registry = CommandRegistry::with_overrides(&overrides);

        let ctrl_q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert_eq!(registry.find_action(ctrl_q), Some(Action::Quit));
        assert_eq!(registry.get(Action::Quit), Some(ctrl_q));

        let j = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(registry.find_action(j), Some(Action::NavigateUp));

        let ctrl_d = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL);
        assert_eq!(registry.find_action(ctrl_d), Some(Action::Logout));
    }
}
