//! Registration screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::layout::LayoutMetrics;
use super::utils::centered_fixed;
use crate::application::RegisterRequest;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::TextInput;

const FULL_NAME: usize = 0;
const EMAIL: usize = 1;
const PASSWORD: usize = 2;
const CONFIRM_PASSWORD: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterAction {
    None,
    Submit,
    OpenLogin,
    Quit,
}

pub struct RegisterScreen {
    inputs: [TextInput; 4],
    focus: usize,
    theme: Theme,
    metrics: LayoutMetrics,
}

impl RegisterScreen {
    #[must_use]
    pub fn new(theme: Theme, metrics: LayoutMetrics) -> Self {
        let mut inputs = [
            TextInput::new("Full Name").placeholder("Your full name"),
            TextInput::new("Email").placeholder("you@example.com"),
            TextInput::new("Password").password(),
            TextInput::new("Confirm Password").password(),
        ]
        .map(|input| input.accent(theme.accent));
        inputs[FULL_NAME].set_focused(true);

        Self {
            inputs,
            focus: FULL_NAME,
            theme,
            metrics,
        }
    }

    #[must_use]
    pub fn request(&self) -> RegisterRequest {
        RegisterRequest::new(
            self.inputs[FULL_NAME].value(),
            self.inputs[EMAIL].value(),
            self.inputs[PASSWORD].value(),
            self.inputs[CONFIRM_PASSWORD].value(),
        )
    }

    /// Returns the visibility of the password and confirmation fields.
    #[must_use]
    pub fn revealed(&self) -> (bool, bool) {
        (
            self.inputs[PASSWORD].is_revealed(),
            self.inputs[CONFIRM_PASSWORD].is_revealed(),
        )
    }

    fn set_focus(&mut self, index: usize) {
        self.focus = index % self.inputs.len();
        for (i, input) in self.inputs.iter_mut().enumerate() {
            input.set_focused(i == self.focus);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> RegisterAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('t') if self.inputs[self.focus].is_password() => {
                    self.inputs[self.focus].toggle_visibility();
                }
                KeyCode::Char('l') => return RegisterAction::OpenLogin,
                _ => {}
            }
            return RegisterAction::None;
        }

        let len = self.inputs.len();
        match key.code {
            KeyCode::Enter => return RegisterAction::Submit,
            KeyCode::Esc => return RegisterAction::Quit,
            KeyCode::Tab | KeyCode::Down => self.set_focus(self.focus + 1),
            KeyCode::BackTab | KeyCode::Up => self.set_focus(self.focus + len - 1),
            _ => {
                self.inputs[self.focus].handle_edit_key(key);
            }
        }

        RegisterAction::None
    }
}

impl Widget for &RegisterScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let gap = self.metrics.gap;
        let height = 2 + gap + 3 * 4 + gap + 3 + gap + 1 + 1 + 2;
        let card = centered_fixed(self.metrics.form_width, height, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent));
        let inner = block.inner(card);
        block.render(card, buf);

        let [
            title,
            subtitle,
            _,
            full_name,
            email,
            password,
            confirm,
            _,
            button,
            _,
            login_link,
            hints,
        ] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(gap),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(gap),
            Constraint::Length(3),
            Constraint::Length(gap),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(Line::from("CREATE AN ACCOUNT").centered())
            .style(self.theme.title_style)
            .render(title, buf);
        Paragraph::new(Line::from("Join us to get started").centered())
            .style(self.theme.dimmed_style)
            .render(subtitle, buf);

        for (input, field_area) in self
            .inputs
            .iter()
            .zip([full_name, email, password, confirm])
        {
            input.render(field_area, buf);
        }

        Paragraph::new(Line::from("REGISTER").centered())
            .style(self.theme.button_style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.accent)),
            )
            .render(button, buf);

        Paragraph::new(
            Line::from(vec![
                Span::raw("Already have an account? "),
                Span::styled("Login here", self.theme.title_style),
                Span::styled(" (C-l)", self.theme.dimmed_style),
            ])
            .centered(),
        )
        .render(login_link, buf);

        Paragraph::new(Line::from("Enter register · Tab next field · Esc quit").centered())
            .style(self.theme.dimmed_style)
            .render(hints, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn screen() -> RegisterScreen {
        RegisterScreen::new(Theme::default(), LayoutMetrics::default())
    }

    fn fill(screen: &mut RegisterScreen, values: [&str; 4]) {
        for value in values {
            for c in value.chars() {
                screen.handle_key(key(KeyCode::Char(c)));
            }
            screen.handle_key(key(KeyCode::Tab));
        }
    }

    #[test]
    fn test_fields_in_order() {
        let mut screen = screen();
        fill(&mut screen, ["Ann", "a@b.com", "pw1", "pw2"]);

        let request = screen.request();
        assert_eq!(request.credentials.full_name, "Ann");
        assert_eq!(request.credentials.email, "a@b.com");
        assert_eq!(request.credentials.password, "pw1");
        assert_eq!(request.credentials.confirm_password, "pw2");
    }

    #[test]
    fn test_visibility_toggles_are_independent() {
        let mut screen = screen();
        screen.handle_key(ctrl('t'));
        assert_eq!(screen.revealed(), (false, false));

        screen.handle_key(key(KeyCode::BackTab));
        screen.handle_key(ctrl('t'));
        assert_eq!(screen.revealed(), (false, true));

        screen.handle_key(key(KeyCode::Up));
        screen.handle_key(ctrl('t'));
        assert_eq!(screen.revealed(), (true, true));
    }

    #[test]
    fn test_actions() {
        let mut screen = screen();
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), RegisterAction::Submit);
        assert_eq!(screen.handle_key(ctrl('l')), RegisterAction::OpenLogin);
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), RegisterAction::Quit);
    }
}
