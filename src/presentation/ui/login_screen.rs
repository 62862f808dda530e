//! Login screen.

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
use crate::application::LoginRequest;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::TextInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoginField {
    Email,
    Password,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginAction {
    None,
    Submit,
    OpenRegister,
    Quit,
}

/// Login screen UI.
pub struct LoginScreen {
    email_input: TextInput,
    password_input: TextInput,
    focus: LoginField,
    theme: Theme,
    metrics: LayoutMetrics,
}

impl LoginScreen {
    /// Creates new login screen.
    #[must_use]
    pub fn new(theme: Theme, metrics: LayoutMetrics) -> Self {
        let mut email_input = TextInput::new("Email")
            .placeholder("you@example.com")
            .accent(theme.accent);
        email_input.set_focused(true);
        let password_input = TextInput::new("Password")
            .password()
            .placeholder("Enter your password")
            .accent(theme.accent);

        Self {
            email_input,
            password_input,
            focus: LoginField::Email,
            theme,
            metrics,
        }
    }

    /// Snapshot of the entered credentials.
    #[must_use]
    pub fn request(&self) -> LoginRequest {
        LoginRequest::new(self.email_input.value(), self.password_input.value())
    }

    #[must_use]
    pub fn is_password_revealed(&self) -> bool {
        self.password_input.is_revealed()
    }

    fn focus_next(&mut self) {
        self.focus = match self.focus {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        };
        self.email_input.set_focused(self.focus == LoginField::Email);
        self.password_input
            .set_focused(self.focus == LoginField::Password);
    }

    fn focused_input(&mut self) -> &mut TextInput {
        match self.focus {
            LoginField::Email => &mut self.email_input,
            LoginField::Password => &mut self.password_input,
        }
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> LoginAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('t') => self.password_input.toggle_visibility(),
                KeyCode::Char('r') => return LoginAction::OpenRegister,
                _ => {}
            }
            return LoginAction::None;
        }

        match key.code {
            KeyCode::Enter => return LoginAction::Submit,
            KeyCode::Esc => return LoginAction::Quit,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => self.focus_next(),
            _ => {
                self.focused_input().handle_edit_key(key);
            }
        }

        LoginAction::None
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let gap = self.metrics.gap;
        let height = 2 + gap + 3 + 3 + 1 + gap + 3 + gap + 1 + 1 + gap + 1 + 1 + 2;
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
            email,
            password,
            forgot,
            _,
            button,
            _,
            divider,
            providers,
            _,
            register_link,
            hints,
        ] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(gap),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(gap),
            Constraint::Length(3),
            Constraint::Length(gap),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(gap),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(Line::from("WELCOME BACK").centered())
            .style(self.theme.title_style)
            .render(title, buf);
        Paragraph::new(Line::from("Please login to your account").centered())
            .style(self.theme.dimmed_style)
            .render(subtitle, buf);

        (&self.email_input).render(email, buf);
        (&self.password_input).render(password, buf);

        Paragraph::new(Line::from("Forgot Password?").right_aligned())
            .style(self.theme.dimmed_style)
            .render(forgot, buf);

        Paragraph::new(Line::from("LOGIN").centered())
            .style(self.theme.button_style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.accent)),
            )
            .render(button, buf);

        Paragraph::new(Line::from("── Or continue with ──").centered())
            .style(self.theme.dimmed_style)
            .render(divider, buf);
        Paragraph::new(Line::from("[ Google ]   [ Apple ]").centered())
            .style(self.theme.dimmed_style)
            .render(providers, buf);

        Paragraph::new(
            Line::from(vec![
                Span::raw("Don't have an account? "),
                Span::styled("Register here", self.theme.title_style),
                Span::styled(" (C-r)", self.theme.dimmed_style),
            ])
            .centered(),
        )
        .render(register_link, buf);

        Paragraph::new(Line::from("Enter login · Tab next field · Esc quit").centered())
            .style(self.theme.dimmed_style)
            .render(hints, buf);
    }
}

impl Widget for &LoginScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
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

    fn screen() -> LoginScreen {
        LoginScreen::new(Theme::default(), LayoutMetrics::default())
    }

    fn type_text(screen: &mut LoginScreen, text: &str) {
        for c in text.chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_fills_focused_field() {
        let mut screen = screen();
        type_text(&mut screen, "a@b.com");
        screen.handle_key(key(KeyCode::Tab));
        type_text(&mut screen, "x");

        let request = screen.request();
        assert_eq!(request.credentials.email, "a@b.com");
        assert_eq!(request.credentials.password, "x");
    }

    #[test]
    fn test_q_is_typed_not_quit() {
        let mut screen = screen();
        assert_eq!(screen.handle_key(key(KeyCode::Char('q'))), LoginAction::None);
        assert_eq!(screen.request().credentials.email, "q");
    }

    #[test]
    fn test_enter_submits_even_when_empty() {
        let mut screen = screen();
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), LoginAction::Submit);
    }

    #[test]
    fn test_control_shortcuts() {
        let mut screen = screen();
        assert!(!screen.is_password_revealed());
        assert_eq!(screen.handle_key(ctrl('t')), LoginAction::None);
        assert!(screen.is_password_revealed());
        assert_eq!(screen.handle_key(ctrl('r')), LoginAction::OpenRegister);
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), LoginAction::Quit);
    }
}
