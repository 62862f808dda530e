use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::{Notification, NotificationLevel};
use crate::presentation::theme::Theme;

const MAX_WIDTH: u16 = 48;
const TOP_OFFSET: u16 = 1;

/// Toast anchored to the top-right corner, below the header row.
pub struct NotificationPopup<'a> {
    notification: &'a Notification,
    theme: &'a Theme,
}

impl<'a> NotificationPopup<'a> {
    #[must_use]
    pub fn new(notification: &'a Notification, theme: &'a Theme) -> Self {
        Self {
            notification,
            theme,
        }
    }

    fn color(&self) -> Color {
        match self.notification.level {
            NotificationLevel::Success => Color::Rgb(0x4C, 0xAF, 0x50),
            NotificationLevel::Warn => Color::Yellow,
        }
    }

    fn popup_area(&self, area: Rect) -> Rect {
        let title = format!(" {} ", self.notification.title);
        let message_width = u16::try_from(self.notification.message.width()).unwrap_or(u16::MAX);
        let title_width = u16::try_from(title.width()).unwrap_or(u16::MAX);

        let width = message_width
            .max(title_width)
            .saturating_add(4)
            .min(MAX_WIDTH)
            .min(area.width.saturating_sub(2));
        let inner_width = width.saturating_sub(2).max(1);
        let lines = message_width.div_ceil(inner_width).max(1);
        let height = lines.saturating_add(2).min(8);

        let x = area.right().saturating_sub(width).saturating_sub(1);
        Rect::new(x, area.y + TOP_OFFSET, width, height).intersection(area)
    }
}

impl Widget for NotificationPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = self.popup_area(area);
        if popup.area() == 0 {
            return;
        }

        let color = self.color();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color))
            .title(format!(" {} ", self.notification.title))
            .title_style(self.theme.title_style);

        let para = Paragraph::new(self.notification.message.as_str())
            .block(block)
            .wrap(Wrap { trim: true })
            .style(Style::default().add_modifier(Modifier::BOLD));

        Clear.render(popup, buf);
        para.render(popup, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_popup_sits_top_right() {
        let notification =
            Notification::new(NotificationLevel::Success, "Login", "Login successful!");
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        NotificationPopup::new(&notification, &theme).render(area, &mut buf);

        let row: String = (0..80).map(|x| buf[(x, 2)].symbol()).collect();
        let start = row.find("Login successful!").expect("message rendered");
        assert!(start > 40);
        assert_eq!(buf[(79, 1)].symbol(), " ");
    }

    #[test_case(NotificationLevel::Success, Color::Rgb(0x4C, 0xAF, 0x50) ; "success_green")]
    #[test_case(NotificationLevel::Warn, Color::Yellow ; "warn_yellow")]
    fn test_border_color_follows_level(level: NotificationLevel, expected: Color) {
        let notification = Notification::new(level, "Booking", "Please fill all fields");
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        NotificationPopup::new(&notification, &theme).render(area, &mut buf);

        let corner = (0..80)
            .find(|&x| buf[(x, 1)].symbol() == "╭")
            .expect("popup border rendered");
        assert_eq!(buf[(corner, 1)].fg, expected);
    }

    #[test]
    fn test_tiny_area_renders_nothing() {
        let notification =
            Notification::new(NotificationLevel::Warn, "Login", "Please fill all fields");
        let theme = Theme::default();
        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);
        NotificationPopup::new(&notification, &theme).render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }
}
