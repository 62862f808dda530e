//! History tab: sample booking requests with colored status badges.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::layout::LayoutMetrics;
use crate::domain::entities::BookingHistoryEntry;
use crate::domain::keybinding::Action;
use crate::presentation::theme::Theme;

#[derive(Debug, Default)]
pub struct HistoryViewState {
    selected: usize,
    offset: usize,
}

impl HistoryViewState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    pub fn handle_action(&mut self, action: Action, len: usize) -> bool {
        let Some(last) = len.checked_sub(1) else {
            return false;
        };
        match action {
            Action::NavigateUp => self.selected = self.selected.saturating_sub(1),
            Action::NavigateDown => self.selected = (self.selected + 1).min(last),
            Action::SelectFirst => self.selected = 0,
            Action::SelectLast => self.selected = last,
            _ => return false,
        }
        true
    }
}

pub struct HistoryView<'a> {
    entries: &'a [BookingHistoryEntry],
    theme: &'a Theme,
    metrics: LayoutMetrics,
}

impl<'a> HistoryView<'a> {
    #[must_use]
    pub const fn new(
        entries: &'a [BookingHistoryEntry],
        theme: &'a Theme,
        metrics: LayoutMetrics,
    ) -> Self {
        Self {
            entries,
            theme,
            metrics,
        }
    }

    fn render_card(
        &self,
        entry: &BookingHistoryEntry,
        selected: bool,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let border_style = if selected {
            Style::default().fg(self.theme.accent)
        } else {
            self.theme.dimmed_style
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let badge = format!(" {} ", entry.status);
        let badge_width = u16::try_from(badge.width()).unwrap_or(u16::MAX);
        let badge_style = Style::default()
            .bg(self.theme.status_color(entry.status))
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD);

        let [text_area, badge_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(badge_width)])
                .areas(inner);

        let schedule = Span::styled(
            entry.schedule(),
            Style::default().add_modifier(Modifier::BOLD),
        );
        let room = Span::styled(entry.room.clone(), self.theme.dimmed_style);
        let lines = if inner.height >= 2 {
            vec![Line::from(schedule), Line::from(room)]
        } else {
            vec![Line::from(vec![schedule, Span::raw(" · "), room])]
        };
        Paragraph::new(lines).render(text_area, buf);

        Paragraph::new(Line::from(Span::styled(badge, badge_style))).render(badge_area, buf);
    }
}

impl StatefulWidget for HistoryView<'_> {
    type State = HistoryViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = Block::default()
            .borders(Borders::TOP)
            .title(Span::styled(" Booking History ", self.theme.title_style))
            .border_style(self.theme.dimmed_style);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.entries.is_empty() {
            Paragraph::new(Line::from("No bookings yet").centered())
                .style(self.theme.dimmed_style)
                .render(inner, buf);
            return;
        }

        let padded = Rect {
            x: inner.x.saturating_add(self.metrics.padding_x),
            width: inner.width.saturating_sub(self.metrics.padding_x * 2),
            ..inner
        };
        let card_height = self.metrics.card_height.max(3);
        let stride = card_height + self.metrics.gap;
        let visible = usize::from((padded.height / stride).max(1));

        state.selected = state.selected.min(self.entries.len() - 1);
        if state.selected < state.offset {
            state.offset = state.selected;
        } else if state.selected >= state.offset + visible {
            state.offset = state.selected + 1 - visible;
        }

        let mut y = padded.y;
        for (i, entry) in self.entries.iter().enumerate().skip(state.offset) {
            if y + card_height > padded.bottom() {
                break;
            }
            let card = Rect::new(padded.x, y, padded.width, card_height);
            self.render_card(entry, i == state.selected, card, buf);
            y += stride;
        }
    }
}
