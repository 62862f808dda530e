//! Booking history entries and the in-progress booking draft.

use super::RoomDetail;

/// Review state of a booking request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    /// Awaiting approval.
    Pending,
    /// Approved by the department.
    Approved,
    /// Rejected by the department.
    Rejected,
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Approved => write!(f, "Approved"),
            Self::Rejected => write!(f, "Rejected"),
        }
    }
}

/// A past booking request shown on the history tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingHistoryEntry {
    /// Human-readable date, e.g. `10 Juni 2025`.
    pub date: String,
    /// Time range, e.g. `18.00–20.00`.
    pub time_range: String,
    /// Room display name.
    pub room: String,
    /// Review state.
    pub status: BookingStatus,
}

impl BookingHistoryEntry {
    /// Creates a history entry.
    #[must_use]
    pub fn new(
        date: impl Into<String>,
        time_range: impl Into<String>,
        room: impl Into<String>,
        status: BookingStatus,
    ) -> Self {
        Self {
            date: date.into(),
            time_range: time_range.into(),
            room: room.into(),
            status,
        }
    }

    /// Returns `"{date} {time_range}"`.
    #[must_use]
    pub fn schedule(&self) -> String {
        format!("{} {}", self.date, self.time_range)
    }
}

/// Editable field of a [`BookingDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    /// Free-form date text.
    Date,
    /// Free-form start time.
    StartTime,
    /// Free-form end time.
    EndTime,
}

impl DraftField {
    /// Fields in dialog order.
    pub const ALL: [Self; 3] = [Self::Date, Self::StartTime, Self::EndTime];
}

/// Uncommitted booking input for a single room.
///
/// Only one draft exists at a time; it is owned by the booking tab and the
/// dialog is visible exactly while a room is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingDraft {
    selected_room: Option<RoomDetail>,
    date: String,
    start_time: String,
    end_time: String,
}

impl BookingDraft {
    /// Creates an empty, closed draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `room` and clears the date and time fields.
    pub fn open(&mut self, room: RoomDetail) {
        self.selected_room = Some(room);
        self.date.clear();
        self.start_time.clear();
        self.end_time.clear();
    }

    /// Overwrites one field.
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Date => self.date = value,
            DraftField::StartTime => self.start_time = value,
            DraftField::EndTime => self.end_time = value,
        }
    }

    /// Returns the current value of `field`.
    #[must_use]
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Date => &self.date,
            DraftField::StartTime => &self.start_time,
            DraftField::EndTime => &self.end_time,
        }
    }

    /// Returns the selected room, if the dialog is open.
    #[must_use]
    pub fn selected_room(&self) -> Option<&RoomDetail> {
        self.selected_room.as_ref()
    }

    /// Returns whether a room is selected.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.selected_room.is_some()
    }

    /// Returns whether the "Book Now" button is enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        DraftField::ALL
            .iter()
            .all(|field| !self.field(*field).trim().is_empty())
    }

    /// Resets to the empty, closed state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn filled_draft() -> BookingDraft {
        let mut draft = BookingDraft::new();
        draft.open(RoomDetail::new("IF-104", "Ruang Kelas"));
        draft.set_field(DraftField::Date, "10 Juni 2025");
        draft.set_field(DraftField::StartTime, "18.00");
        draft.set_field(DraftField::EndTime, "20.00");
        draft
    }

    #[test]
    fn test_open_clears_previous_input() {
        let mut draft = filled_draft();
        draft.open(RoomDetail::new("LP1", "Laboratorium Pemrograman 1"));

        assert_eq!(draft.selected_room().map(RoomDetail::code), Some("LP1"));
        for field in DraftField::ALL {
            assert_eq!(draft.field(field), "");
        }
    }

    #[test]
    fn test_can_submit_when_all_filled() {
        assert!(filled_draft().can_submit());
    }

    #[test_case(DraftField::Date ; "date")]
    #[test_case(DraftField::StartTime ; "start")]
    #[test_case(DraftField::EndTime ; "end")]
    fn test_emptying_any_field_disables_submit(field: DraftField) {
        let mut draft = filled_draft();
        draft.set_field(field, "");
        assert!(!draft.can_submit());

        draft.set_field(field, "x");
        assert!(draft.can_submit());
    }

    #[test]
    fn test_whitespace_counts_as_blank() {
        let mut draft = filled_draft();
        draft.set_field(DraftField::Date, "   ");
        assert!(!draft.can_submit());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut draft = filled_draft();
        draft.clear();

        assert!(draft.selected_room().is_none());
        assert!(!draft.is_open());
        assert_eq!(draft, BookingDraft::default());
    }

    #[test]
    fn test_history_schedule() {
        let entry = BookingHistoryEntry::new(
            "9 Juni 2025",
            "18.00–20.00",
            "Ruang Kelas IF-107",
            BookingStatus::Approved,
        );
        assert_eq!(entry.schedule(), "9 Juni 2025 18.00–20.00");
        assert_eq!(entry.status.to_string(), "Approved");
    }
}
