use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};
use unicode_width::UnicodeWidthStr;

/// Helper function to create a centered rect using up certain percentage of the available rect `r`
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Centers a fixed-size box inside `r`, clamped to its bounds.
#[must_use]
pub fn centered_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(r.height))])
        .flex(Flex::Center)
        .areas(r);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(r.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Greedy word wrap by display width. Words wider than `width` get a row
/// of their own and are clipped by the renderer.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            rows.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 40, outer);
        assert_eq!(outer.intersection(inner), inner);
        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 20);
    }

    #[test]
    fn test_centered_fixed_clamps() {
        let outer = Rect::new(0, 0, 40, 10);
        let inner = centered_fixed(30, 4, outer);
        assert_eq!(inner, Rect::new(5, 3, 30, 4));

        let clamped = centered_fixed(80, 20, outer);
        assert_eq!(clamped, outer);
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(
            wrap_text("Dilarang membawa kunci aula.", 12),
            vec!["Dilarang", "membawa", "kunci aula."]
        );
        assert_eq!(wrap_text("short", 40), vec!["short"]);
        assert_eq!(wrap_text("", 10), vec![""]);
        assert_eq!(wrap_text("overlong", 3), vec!["overlong"]);
    }
}
