use super::adapter::ColorConverter;
use crate::domain::entities::BookingStatus;
use crate::infrastructure::config::{ThemeConfig, ThemeMode};
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub title_style: Style,
    pub selection_style: Style,
    pub dimmed_style: Style,
    pub base_style: Style,
    pub button_style: Style,
    pub disabled_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("#20469B", ThemeMode::Dark)
    }
}

impl Theme {
    pub fn new(accent_color_str: &str, mode: ThemeMode) -> Self {
        Self::from_color(parse_color(accent_color_str), mode)
    }

    #[must_use]
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self::new(&config.accent_color, config.mode)
    }

    #[must_use]
    pub fn from_color(accent: Color, mode: ThemeMode) -> Self {
        let selection_bg = match mode {
            ThemeMode::Dark => ColorConverter::shade(accent, 0.2, 0.3),
            ThemeMode::Light => ColorConverter::shade(accent, 0.85, 0.3),
        };

        let (text, title_fg) = match mode {
            ThemeMode::Dark => (Color::White, ColorConverter::lighten_to(accent, 0.65)),
            ThemeMode::Light => (Color::Black, accent),
        };

        Self {
            accent,
            title_style: Style::default().fg(title_fg).add_modifier(Modifier::BOLD),
            selection_style: Style::default().bg(selection_bg).fg(text),
            dimmed_style: Style::default().fg(Color::DarkGray),
            base_style: Style::default().fg(Color::Reset),
            button_style: Style::default()
                .bg(accent)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            disabled_style: Style::default().bg(Color::DarkGray).fg(Color::Gray),
        }
    }

    #[must_use]
    pub const fn status_color(&self, status: BookingStatus) -> Color {
        match status {
            BookingStatus::Approved => Color::Rgb(0x4C, 0xAF, 0x50),
            BookingStatus::Rejected => Color::Rgb(0xF4, 0x43, 0x36),
            BookingStatus::Pending => Color::Rgb(0xFF, 0xC1, 0x07),
        }
    }
}

fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if s.starts_with('#')
        && let Ok((r, g, b)) = parse_hex_color(s)
    {
        return Color::Rgb(r, g, b);
    }

    match s.to_lowercase().as_str() {
        "orange" => Color::Indexed(208),
        _ => Color::Blue,
    }
}

fn parse_hex_color(s: &str) -> Result<(u8, u8, u8), ()> {
    let s = s.trim_start_matches('#');

    if !s.is_ascii() {
        return Err(());
    }

    if s.len() == 6 {
        let r = u8::from_str_radix(&s[0..2], 16).map_err(|_| ())?;
        let g = u8::from_str_radix(&s[2..4], 16).map_err(|_| ())?;
        let b = u8::from_str_radix(&s[4..6], 16).map_err(|_| ())?;
        Ok((r, g, b))
    } else if s.len() == 3 {
        let r = u8::from_str_radix(&s[0..1].repeat(2), 16).map_err(|_| ())?;
        let g = u8::from_str_radix(&s[1..2].repeat(2), 16).map_err(|_| ())?;
        let b = u8::from_str_radix(&s[2..3].repeat(2), 16).map_err(|_| ())?;
        Ok((r, g, b))
    } else {
        Err(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("Red"), Color::Red);
        assert_eq!(parse_color("blue"), Color::Blue);
        assert_eq!(parse_color("#20469B"), Color::Rgb(0x20, 0x46, 0x9B));
        assert_eq!(parse_color("#0f0"), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color("Orange"), Color::Indexed(208));
        assert_eq!(parse_color("Invalid"), Color::Blue);
    }

    #[test]
    fn test_status_colors_are_distinct() {
        let theme = Theme::default();
        let approved = theme.status_color(BookingStatus::Approved);
        let pending = theme.status_color(BookingStatus::Pending);
        let rejected = theme.status_color(BookingStatus::Rejected);
        assert_ne!(approved, pending);
        assert_ne!(pending, rejected);
        assert_ne!(approved, rejected);
    }

    #[test]
    fn test_from_config() {
        let config = ThemeConfig {
            accent_color: "Cyan".to_string(),
            mode: ThemeMode::Light,
        };
        let theme = Theme::from_config(&config);
        assert_eq!(theme.accent, Color::Cyan);
    }
}
