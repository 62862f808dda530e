use coolor::{Hsl, Rgb};
use ratatui::style::Color;

/// Standard 16-color palette as rendered by xterm-like terminals.
const ANSI_16: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (170, 0, 0),
    (0, 170, 0),
    (170, 85, 0),
    (0, 0, 170),
    (170, 0, 170),
    (0, 170, 170),
    (170, 170, 170),
    (85, 85, 85),
    (255, 85, 85),
    (85, 255, 85),
    (255, 255, 85),
    (85, 85, 255),
    (255, 85, 255),
    (85, 255, 255),
    (255, 255, 255),
];

pub struct ColorConverter;

impl ColorConverter {
    #[must_use]
    pub fn to_hsl(color: Color) -> Hsl {
        let (r, g, b) = match color {
            Color::Rgb(r, g, b) => (r, g, b),
            Color::Black => ANSI_16[0],
            Color::Red => ANSI_16[1],
            Color::Green => ANSI_16[2],
            Color::Yellow => ANSI_16[3],
            Color::Blue => ANSI_16[4],
            Color::Magenta => ANSI_16[5],
            Color::Cyan => ANSI_16[6],
            Color::Gray => ANSI_16[7],
            Color::DarkGray => ANSI_16[8],
            Color::LightRed => ANSI_16[9],
            Color::LightGreen => ANSI_16[10],
            Color::LightYellow => ANSI_16[11],
            Color::LightBlue => ANSI_16[12],
            Color::LightMagenta => ANSI_16[13],
            Color::LightCyan => ANSI_16[14],
            Color::Indexed(i) => indexed_to_rgb(i),
            _ => ANSI_16[15],
        };

        Rgb::new(r, g, b).to_hsl()
    }

    #[must_use]
    pub fn to_ratatui(hsl: Hsl) -> Color {
        let rgb: Rgb = hsl.to_rgb();
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }

    /// Returns `color` with its lightness and saturation replaced.
    #[must_use]
    pub fn shade(color: Color, lightness: f32, saturation: f32) -> Color {
        let mut hsl = Self::to_hsl(color);
        hsl.l = lightness;
        hsl.s = saturation;
        Self::to_ratatui(hsl)
    }

    /// Raises the lightness of `color` to at least `min_lightness`.
    #[must_use]
    pub fn lighten_to(color: Color, min_lightness: f32) -> Color {
        let mut hsl = Self::to_hsl(color);
        hsl.l = hsl.l.max(min_lightness);
        Self::to_ratatui(hsl)
    }
}

fn indexed_to_rgb(i: u8) -> (u8, u8, u8) {
    match i {
        0..=15 => ANSI_16[usize::from(i)],
        16..=231 => {
            let i = i - 16;
            let level = |c: u8| if c == 0 { 0 } else { c * 40 + 55 };
            (level(i / 36), level((i / 6) % 6), level(i % 6))
        }
        232..=255 => {
            let v = (i - 232) * 10 + 8;
            (v, v, v)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_survives_conversion() {
        let original = Color::Rgb(0x20, 0x46, 0x9B);
        let back = ColorConverter::to_ratatui(ColorConverter::to_hsl(original));

        let Color::Rgb(r, g, b) = back else {
            panic!("Expected RGB color");
        };
        assert!((i16::from(r) - 0x20).abs() <= 1);
        assert!((i16::from(g) - 0x46).abs() <= 1);
        assert!((i16::from(b) - 0x9B).abs() <= 1);
    }

    #[test]
    fn test_indexed_palette() {
        assert_eq!(indexed_to_rgb(1), (170, 0, 0));
        assert_eq!(indexed_to_rgb(16), (0, 0, 0));
        assert_eq!(indexed_to_rgb(208), (255, 135, 0));
        assert_eq!(indexed_to_rgb(231), (255, 255, 255));
        assert_eq!(indexed_to_rgb(232), (8, 8, 8));
    }

    #[test]
    fn test_lighten_to_never_darkens() {
        let white = Color::Rgb(255, 255, 255);
        assert_eq!(ColorConverter::lighten_to(white, 0.3), white);
    }
}
