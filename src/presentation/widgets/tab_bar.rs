use crate::domain::Tab;
use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

pub struct TabBarStyle {
    pub active: Style,
    pub inactive: Style,
    pub background: Style,
}

impl TabBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            active: theme.button_style,
            ..Self::default()
        }
    }
}

impl Default for TabBarStyle {
    fn default() -> Self {
        Self {
            active: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            inactive: Style::default().fg(Color::Gray),
            background: Style::default(),
        }
    }
}

/// Bottom navigation bar with one equal-width cell per tab.
pub struct TabBar {
    selected: Tab,
    style: TabBarStyle,
}

impl TabBar {
    #[must_use]
    pub fn new(selected: Tab) -> Self {
        Self {
            selected,
            style: TabBarStyle::default(),
        }
    }

    #[must_use]
    pub fn style(mut self, style: TabBarStyle) -> Self {
        self.style = style;
        self
    }

    const fn icon(tab: Tab) -> &'static str {
        match tab {
            Tab::Home => "⌂",
            Tab::Booking => "▦",
            Tab::History => "↺",
            Tab::Profile => "☺",
        }
    }
}

impl Widget for TabBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        buf.set_style(area, self.style.background);

        let cells = Layout::horizontal([Constraint::Fill(1); Tab::ALL.len()]).split(area);
        for (tab, cell) in Tab::ALL.into_iter().zip(cells.iter()) {
            let style = if tab == self.selected {
                self.style.active
            } else {
                self.style.inactive
            };
            let label = format!("{} {} {}", Self::icon(tab), tab.index() + 1, tab.title());
            Paragraph::new(Line::from(label).centered())
                .style(style)
                .render(*cell, buf);
        }
    }
}
