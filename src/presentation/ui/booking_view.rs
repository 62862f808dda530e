//! Booking tab: room list and the modal room details dialog.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{
        Block, Borders, Clear, List, ListItem, ListState, Paragraph, StatefulWidget, Widget,
    },
};

use super::layout::LayoutMetrics;
use super::utils::centered_fixed;
use crate::application::{BookingReceipt, SubmitBookingUseCase};
use crate::domain::ValidationError;
use crate::domain::entities::{BookingDraft, DraftField, RoomDetail};
use crate::domain::keybinding::Action;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::TextInput;

const fn field_label(field: DraftField) -> &'static str {
    match field {
        DraftField::Date => "Date (e.g. 10 Juni 2025)",
        DraftField::StartTime => "Start Time",
        DraftField::EndTime => "End Time",
    }
}

const fn field_placeholder(field: DraftField) -> &'static str {
    match field {
        DraftField::Date => "10 Juni 2025",
        DraftField::StartTime => "18.00",
        DraftField::EndTime => "20.00",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingOutcome {
    /// Key not used; the caller may handle it.
    Ignored,
    Consumed,
    /// "Book Now" pressed with every field filled.
    Submit,
}

pub struct BookingViewState {
    list_state: ListState,
    draft: BookingDraft,
    inputs: [TextInput; 3],
    focus: usize,
}

impl BookingViewState {
    #[must_use]
    pub fn new(theme: &Theme) -> Self {
        let inputs = DraftField::ALL.map(|field| {
            TextInput::new(field_label(field))
                .placeholder(field_placeholder(field))
                .accent(theme.accent)
        });

        Self {
            list_state: ListState::default().with_selected(Some(0)),
            draft: BookingDraft::new(),
            inputs,
            focus: 0,
        }
    }

    #[must_use]
    pub const fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.list_state.selected()
    }

    #[must_use]
    pub fn is_dialog_open(&self) -> bool {
        self.draft.is_open()
    }

    /// Opens the dialog for `room` with empty date and time fields.
    pub fn open_room_detail(&mut self, room: RoomDetail) {
        self.draft.open(room);
        for input in &mut self.inputs {
            input.clear();
        }
        self.set_focus(0);
    }

    /// Overwrites one draft field and its input.
    pub fn update_draft_field(&mut self, field: DraftField, value: &str) {
        self.draft.set_field(field, value);
        if let Some(index) = DraftField::ALL.iter().position(|f| *f == field) {
            self.inputs[index].set_value(value);
        }
    }

    /// Closes the dialog without booking.
    pub fn dismiss(&mut self) {
        self.draft.clear();
        for input in &mut self.inputs {
            input.clear();
        }
    }

    /// Runs the submission against the open draft. The dialog closes only
    /// on success.
    ///
    /// # Errors
    /// Propagates the use case's validation error; the draft is kept.
    pub fn submit(
        &mut self,
        use_case: &SubmitBookingUseCase,
    ) -> Result<BookingReceipt, ValidationError> {
        let receipt = use_case.execute(&mut self.draft)?;
        self.dismiss();
        Ok(receipt)
    }

    fn set_focus(&mut self, index: usize) {
        self.focus = index % self.inputs.len();
        for (i, input) in self.inputs.iter_mut().enumerate() {
            input.set_focused(i == self.focus);
        }
    }

    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        action: Option<Action>,
        rooms: &[RoomDetail],
    ) -> BookingOutcome {
        if self.draft.is_open() {
            return self.handle_dialog_key(key);
        }

        let Some(last) = rooms.len().checked_sub(1) else {
            return BookingOutcome::Ignored;
        };
        let selected = self.list_state.selected().unwrap_or(0).min(last);

        match action {
            Some(Action::NavigateUp) => self.list_state.select(Some(selected.saturating_sub(1))),
            Some(Action::NavigateDown) => self.list_state.select(Some((selected + 1).min(last))),
            Some(Action::SelectFirst) => self.list_state.select(Some(0)),
            Some(Action::SelectLast) => self.list_state.select(Some(last)),
            Some(Action::Select) => self.open_room_detail(rooms[selected].clone()),
            _ => return BookingOutcome::Ignored,
        }
        BookingOutcome::Consumed
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) -> BookingOutcome {
        let len = self.inputs.len();
        match key.code {
            KeyCode::Esc => self.dismiss(),
            KeyCode::Enter => {
                if self.draft.can_submit() {
                    return BookingOutcome::Submit;
                }
            }
            KeyCode::Tab | KeyCode::Down => self.set_focus(self.focus + 1),
            KeyCode::BackTab | KeyCode::Up => self.set_focus(self.focus + len - 1),
            _ => {
                if self.inputs[self.focus].handle_edit_key(key) {
                    let field = DraftField::ALL[self.focus];
                    self.draft.set_field(field, self.inputs[self.focus].value());
                }
            }
        }
        BookingOutcome::Consumed
    }
}

pub struct BookingView<'a> {
    rooms: &'a [RoomDetail],
    theme: &'a Theme,
    metrics: LayoutMetrics,
}

impl<'a> BookingView<'a> {
    #[must_use]
    pub const fn new(rooms: &'a [RoomDetail], theme: &'a Theme, metrics: LayoutMetrics) -> Self {
        Self {
            rooms,
            theme,
            metrics,
        }
    }

    fn room_item(&self, room: &RoomDetail) -> ListItem<'static> {
        let mut lines = vec![
            Line::from(Span::styled(
                room.code().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(room.name().to_string(), self.theme.dimmed_style)),
        ];
        for _ in 3..self.metrics.card_height {
            lines.push(Line::default());
        }
        ListItem::new(Text::from(lines))
    }

    fn render_dialog(&self, area: Rect, buf: &mut Buffer, state: &BookingViewState) {
        let Some(room) = state.draft.selected_room() else {
            return;
        };

        let gap = self.metrics.gap;
        let height = 2 + 4 + gap + 3 * 3 + gap + 3 + 1;
        let dialog = centered_fixed(self.metrics.dialog_width, height, area);
        Clear.render(dialog, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .title(Span::styled(" Room Details ", self.theme.title_style));
        let inner = block.inner(dialog);
        block.render(dialog, buf);

        let [details, _, date, start, end, _, button, hints] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(gap),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(gap),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(inner);

        let detail = |label: &'static str, value: &str| {
            Line::from(vec![
                Span::styled(format!("{label:<14}"), self.theme.dimmed_style),
                Span::raw(value.to_string()),
            ])
        };
        Paragraph::new(vec![
            detail("Room Code", room.code()),
            detail("Room Name", room.name()),
            detail("Technician", room.technician()),
            detail("Phone Number", room.phone()),
        ])
        .render(details, buf);

        for (input, field_area) in state.inputs.iter().zip([date, start, end]) {
            input.render(field_area, buf);
        }

        let enabled = state.draft.can_submit();
        let button_style = if enabled {
            self.theme.button_style
        } else {
            self.theme.disabled_style
        };
        Paragraph::new(Line::from("Book Now").centered())
            .style(button_style)
            .block(Block::default().borders(Borders::ALL).border_style(button_style))
            .render(button, buf);

        Paragraph::new(Line::from("Enter book · Tab next field · Esc close").centered())
            .style(self.theme.dimmed_style)
            .render(hints, buf);
    }
}

impl StatefulWidget for BookingView<'_> {
    type State = BookingViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = Block::default()
            .borders(Borders::TOP)
            .title(Span::styled(" Room Booking ", self.theme.title_style))
            .border_style(self.theme.dimmed_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let padded = Rect {
            x: inner.x.saturating_add(self.metrics.padding_x),
            width: inner.width.saturating_sub(self.metrics.padding_x * 2),
            ..inner
        };

        let items: Vec<ListItem> = self.rooms.iter().map(|room| self.room_item(room)).collect();
        let list = List::new(items)
            .highlight_style(self.theme.selection_style)
            .highlight_symbol("▌ ");
        StatefulWidget::render(list, padded, buf, &mut state.list_state);

        if state.draft.is_open() {
            self.render_dialog(area, buf, state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{CatalogPort, mocks::MockCatalog};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(state: &mut BookingViewState, text: &str) {
        for c in text.chars() {
            state.handle_key(key(KeyCode::Char(c)), None, &[]);
        }
    }

    fn open_first(state: &mut BookingViewState, rooms: &[RoomDetail]) {
        let outcome = state.handle_key(key(KeyCode::Enter), Some(Action::Select), rooms);
        assert_eq!(outcome, BookingOutcome::Consumed);
    }

    #[test]
    fn test_list_navigation() {
        let catalog = MockCatalog::new();
        let rooms = catalog.rooms();
        let mut state = BookingViewState::new(&Theme::default());

        state.handle_key(key(KeyCode::Down), Some(Action::NavigateDown), rooms);
        assert_eq!(state.selected_index(), Some(1));
        state.handle_key(key(KeyCode::End), Some(Action::SelectLast), rooms);
        state.handle_key(key(KeyCode::Down), Some(Action::NavigateDown), rooms);
        assert_eq!(state.selected_index(), Some(rooms.len() - 1));
        assert_eq!(
            state.handle_key(key(KeyCode::Char('3')), Some(Action::GoHistory), rooms),
            BookingOutcome::Ignored
        );
    }

    #[test]
    fn test_open_sets_room_and_clears_fields() {
        let catalog = MockCatalog::new();
        let rooms = catalog.rooms();
        let mut state = BookingViewState::new(&Theme::default());

        open_first(&mut state, rooms);
        type_text(&mut state, "10 Juni 2025");
        state.dismiss();

        state.handle_key(key(KeyCode::Down), Some(Action::NavigateDown), rooms);
        open_first(&mut state, rooms);
        assert_eq!(state.draft().selected_room().map(RoomDetail::code), Some("IF-104"));
        for field in DraftField::ALL {
            assert_eq!(state.draft().field(field), "");
        }
    }

    #[test]
    fn test_dialog_captures_tab_shortcuts() {
        let catalog = MockCatalog::new();
        let rooms = catalog.rooms();
        let mut state = BookingViewState::new(&Theme::default());
        open_first(&mut state, rooms);

        let outcome = state.handle_key(key(KeyCode::Char('2')), Some(Action::GoBooking), rooms);
        assert_eq!(outcome, BookingOutcome::Consumed);
        assert_eq!(state.draft().field(DraftField::Date), "2");
    }

    #[test]
    fn test_enter_submits_only_when_complete() {
        let catalog = MockCatalog::new();
        let rooms = catalog.rooms();
        let mut state = BookingViewState::new(&Theme::default());
        open_first(&mut state, rooms);

        type_text(&mut state, "10 Juni 2025");
        state.handle_key(key(KeyCode::Tab), None, rooms);
        type_text(&mut state, "18.00");
        assert_eq!(
            state.handle_key(key(KeyCode::Enter), None, rooms),
            BookingOutcome::Consumed
        );

        state.handle_key(key(KeyCode::Tab), None, rooms);
        type_text(&mut state, "20.00");
        assert_eq!(
            state.handle_key(key(KeyCode::Enter), None, rooms),
            BookingOutcome::Submit
        );

        let receipt = state.submit(&SubmitBookingUseCase::new()).unwrap();
        assert_eq!(receipt.message(), "Booking submitted for IF-101");
        assert!(!state.is_dialog_open());
        assert_eq!(state.draft(), &BookingDraft::new());
    }

    #[test]
    fn test_whitespace_only_field_keeps_button_disabled() {
        let catalog = MockCatalog::new();
        let rooms = catalog.rooms();
        let mut state = BookingViewState::new(&Theme::default());
        open_first(&mut state, rooms);

        state.update_draft_field(DraftField::Date, "10 Juni 2025");
        state.update_draft_field(DraftField::StartTime, "18.00");
        state.update_draft_field(DraftField::EndTime, "  ");
        assert!(!state.draft().can_submit());
        assert_eq!(
            state.handle_key(key(KeyCode::Enter), None, rooms),
            BookingOutcome::Consumed
        );
    }

    #[test]
    fn test_escape_dismisses_without_touching_catalog() {
        let catalog = MockCatalog::new();
        let rooms = catalog.rooms();
        let before = rooms.to_vec();
        let history_before = catalog.booking_history().to_vec();
        let mut state = BookingViewState::new(&Theme::default());
        open_first(&mut state, rooms);
        type_text(&mut state, "x");

        state.handle_key(key(KeyCode::Esc), Some(Action::Cancel), rooms);
        assert!(!state.is_dialog_open());
        assert_eq!(state.draft(), &BookingDraft::new());
        assert_eq!(catalog.rooms(), before.as_slice());
        assert_eq!(catalog.booking_history(), history_before.as_slice());
    }

    #[test]
    fn test_dialog_renders_room_details() {
        let catalog = MockCatalog::new();
        let rooms = catalog.rooms();
        let theme = Theme::default();
        let mut state = BookingViewState::new(&theme);
        open_first(&mut state, rooms);

        let area = Rect::new(0, 0, 80, 30);
        let mut buf = Buffer::empty(area);
        BookingView::new(rooms, &theme, LayoutMetrics::default())
            .render(area, &mut buf, &mut state);

        let text: String = (0..30)
            .map(|y| (0..80).map(|x| buf[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("Room Details"));
        assert!(text.contains("Junaidy Abdillah"));
        assert!(text.contains("087855224496"));
        assert!(text.contains("Book Now"));
    }
}
