//! Profile tab: account details and the logout button.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::layout::LayoutMetrics;
use crate::domain::UserProfile;
use crate::presentation::theme::Theme;

pub struct ProfileView<'a> {
    profile: &'a UserProfile,
    theme: &'a Theme,
    metrics: LayoutMetrics,
}

impl<'a> ProfileView<'a> {
    #[must_use]
    pub const fn new(profile: &'a UserProfile, theme: &'a Theme, metrics: LayoutMetrics) -> Self {
        Self {
            profile,
            theme,
            metrics,
        }
    }
}

impl Widget for ProfileView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::TOP)
            .title(Span::styled(" Profile ", self.theme.title_style))
            .border_style(self.theme.dimmed_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let padded = Rect {
            x: inner.x.saturating_add(self.metrics.padding_x),
            width: inner
                .width
                .saturating_sub(self.metrics.padding_x * 2)
                .min(self.metrics.form_width),
            ..inner
        };

        let gap = self.metrics.gap;
        let [greeting, _, details, _, button] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(gap),
            Constraint::Length(4),
            Constraint::Length(gap),
            Constraint::Length(3),
        ])
        .areas(padded);

        Paragraph::new(Line::from(vec![
            Span::raw("Hi, "),
            Span::styled(
                self.profile.full_name().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("!"),
        ]))
        .render(greeting, buf);

        let field = |label: &'static str, value: &str| {
            Line::from(vec![
                Span::styled(format!("{label:<11}"), self.theme.dimmed_style),
                Span::raw(value.to_string()),
            ])
        };
        Paragraph::new(vec![
            field("Full Name", self.profile.full_name()),
            field("Email", self.profile.email()),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.dimmed_style)
                .title(Span::styled(" Account Details ", self.theme.title_style)),
        )
        .render(details, buf);

        Paragraph::new(Line::from("Logout").centered())
            .style(self.theme.button_style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.accent)),
            )
            .render(button, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shows_account_details() {
        let profile = UserProfile::new("Ann Lee", "ann@its.ac.id");
        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, 14);
        let mut buf = Buffer::empty(area);
        ProfileView::new(&profile, &theme, LayoutMetrics::default()).render(area, &mut buf);

        let text: String = (0..14)
            .map(|y| (0..60).map(|x| buf[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("Hi, Ann Lee!"));
        assert!(text.contains("Account Details"));
        assert!(text.contains("ann@its.ac.id"));
        assert!(text.contains("Logout"));
    }
}
