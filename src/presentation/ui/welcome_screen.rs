//! Landing screen with the wordmark and the register/login choice.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tachyonfx::{Effect, Interpolation, fx};

use super::layout::LayoutMetrics;
use super::utils::centered_fixed;
use crate::presentation::theme::Theme;

const WORDMARK: [&str; 5] = [
    "████              ███ █████",
    "█   █  ███   ████  █  █    ",
    "████  █████ ███    █  ████ ",
    "█  █  █       ███  █  █    ",
    "█   █  ████ ████  ███ █    ",
];

const INTRO_MS: u32 = 800;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WelcomeChoice {
    #[default]
    Register,
    Login,
}

impl WelcomeChoice {
    const fn toggled(self) -> Self {
        match self {
            Self::Register => Self::Login,
            Self::Login => Self::Register,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WelcomeAction {
    None,
    OpenLogin,
    OpenRegister,
    Quit,
}

pub struct WelcomeScreen {
    choice: WelcomeChoice,
    intro_effect: Option<Effect>,
    pending_duration: Duration,
    theme: Theme,
    metrics: LayoutMetrics,
}

impl WelcomeScreen {
    #[must_use]
    pub fn new(theme: Theme, metrics: LayoutMetrics, animations: bool) -> Self {
        let intro_effect = animations.then(|| fx::coalesce((INTRO_MS, Interpolation::CircOut)));

        Self {
            choice: WelcomeChoice::default(),
            intro_effect,
            pending_duration: Duration::ZERO,
            theme,
            metrics,
        }
    }

    #[must_use]
    pub const fn choice(&self) -> WelcomeChoice {
        self.choice
    }

    /// Returns whether the intro animation still needs frames.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.intro_effect.is_some()
    }

    pub fn tick(&mut self, duration: Duration) {
        self.pending_duration = self.pending_duration.saturating_add(duration);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> WelcomeAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return WelcomeAction::None;
        }

        match key.code {
            KeyCode::Char('l' | 'L') => WelcomeAction::OpenLogin,
            KeyCode::Char('r' | 'R') => WelcomeAction::OpenRegister,
            KeyCode::Char('q') | KeyCode::Esc => WelcomeAction::Quit,
            KeyCode::Up
            | KeyCode::Down
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Char('j' | 'k') => {
                self.choice = self.choice.toggled();
                WelcomeAction::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.choice {
                WelcomeChoice::Register => WelcomeAction::OpenRegister,
                WelcomeChoice::Login => WelcomeAction::OpenLogin,
            },
            _ => WelcomeAction::None,
        }
    }

    fn button(&self, label: &'static str, choice: WelcomeChoice) -> Paragraph<'static> {
        let selected = self.choice == choice;
        let (style, border) = if selected {
            (self.theme.button_style, Style::default().fg(self.theme.accent))
        } else {
            (Style::default().fg(self.theme.accent), Style::default().fg(self.theme.accent))
        };

        Paragraph::new(Line::from(label).centered())
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_style(border))
    }
}

impl Widget for &mut WelcomeScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let gap = self.metrics.gap;
        let height = 1 + gap + 5 + 1 + gap + 1 + gap * 2 + 3 + gap + 3 + 1 + 1;

        let column = centered_fixed(self.metrics.form_width, height, area);

        let [
            logo_placeholder,
            _,
            wordmark,
            subtitle,
            _,
            _,
            _,
            register,
            _,
            login,
            _,
            hints,
        ] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(gap),
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Length(gap),
            Constraint::Length(1),
            Constraint::Length(gap * 2),
            Constraint::Length(3),
            Constraint::Length(gap),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(column);

        Paragraph::new(Line::from("[ Logo ITS ]").centered())
            .style(self.theme.dimmed_style)
            .render(logo_placeholder, buf);

        let logo = Text::from(WORDMARK.iter().map(|row| Line::from(*row)).collect::<Vec<_>>())
            .centered()
            .style(
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            );
        Paragraph::new(logo).render(wordmark, buf);

        Paragraph::new(Line::from("Reservasi Ruang Informatika").centered())
            .style(self.theme.title_style)
            .render(subtitle, buf);

        self.button("REGISTER", WelcomeChoice::Register)
            .render(register, buf);
        self.button("LOGIN", WelcomeChoice::Login).render(login, buf);

        Paragraph::new(
            Line::from(vec![
                Span::styled("r", self.theme.title_style),
                Span::styled(" register  ", self.theme.dimmed_style),
                Span::styled("l", self.theme.title_style),
                Span::styled(" login  ", self.theme.dimmed_style),
                Span::styled("q", self.theme.title_style),
                Span::styled(" quit", self.theme.dimmed_style),
            ])
            .centered(),
        )
        .render(hints, buf);

        let duration = self.pending_duration;
        self.pending_duration = Duration::ZERO;

        if let Some(effect) = self.intro_effect.as_mut() {
            let overflow = effect.process(duration.into(), buf, column);
            if overflow.is_some() || effect.done() {
                self.intro_effect = None;
            }
        }
    }
}
