use crate::presentation::theme::Theme;
use crate::presentation::theme::adapter::ColorConverter;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

const GREETING: &str = "Hi, Welcome!";
const BELL: &str = "🔔";

pub struct HeaderBarStyle {
    pub background: Style,
    pub app_name: Style,
    pub version: Style,
    pub greeting: Style,
    pub user_name: Style,
}

impl HeaderBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        let version_bg = ColorConverter::shade(theme.accent, 0.08, 0.5);

        Self {
            app_name: Style::default()
                .bg(theme.accent)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            version: Style::default().bg(version_bg).fg(Color::White),
            user_name: theme.title_style,
            ..Self::default()
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            app_name: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            version: Style::default().fg(Color::DarkGray),
            greeting: Style::default().fg(Color::Gray),
            user_name: Style::default().add_modifier(Modifier::BOLD),
        }
    }
}

/// Top bar of the authenticated area: app badge on the left, greeting on the right.
pub struct HeaderBar<'a> {
    app_name: &'a str,
    version: &'a str,
    user_name: &'a str,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    #[must_use]
    pub fn new(app_name: &'a str, version: &'a str, user_name: &'a str) -> Self {
        Self {
            app_name,
            version,
            user_name,
            style: HeaderBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }

    fn greeting_spans(&self) -> (Vec<Span<'a>>, u16) {
        let spans = vec![
            Span::styled(format!("{GREETING} "), self.style.greeting),
            Span::styled(self.user_name, self.style.user_name),
            Span::raw(format!(" {BELL} ")),
        ];
        let width = spans.iter().map(|s| s.content.width()).sum::<usize>();
        (spans, u16::try_from(width).unwrap_or(u16::MAX))
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let app_badge = format!(" {} ", self.app_name);
        let version_badge = format!(" v{} ", self.version);
        let left_width = u16::try_from(app_badge.width() + 1 + version_badge.width())
            .unwrap_or(u16::MAX);
        let left_line = Line::from(vec![
            Span::styled(app_badge, self.style.app_name),
            Span::raw(" "),
            Span::styled(version_badge, self.style.version),
        ]);
        let left_area = Rect::new(area.x, area.y, left_width.min(area.width), 1);
        Paragraph::new(left_line).render(left_area, buf);

        let (greeting, greeting_width) = self.greeting_spans();
        if greeting_width < area.width.saturating_sub(left_width) {
            let right_x = area.right().saturating_sub(greeting_width);
            let right_area = Rect::new(right_x, area.y, greeting_width, 1);
            Paragraph::new(Line::from(greeting)).render(right_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, width: u16) -> String {
        (0..width).map(|x| buf[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_header_shows_app_and_greeting() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        HeaderBar::new("ResIF", "0.1.0", "Ann").render(area, &mut buf);

        let text = row_text(&buf, 60);
        assert!(text.starts_with(" ResIF "));
        assert!(text.contains("v0.1.0"));
        assert!(text.contains("Hi, Welcome! Ann"));
    }

    #[test]
    fn test_narrow_header_drops_greeting() {
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        HeaderBar::new("ResIF", "0.1.0", "Ann").render(area, &mut buf);

        assert!(!row_text(&buf, 20).contains("Welcome"));
    }
}
