//! Booking submission use case implementation.

use tracing::{info, warn};

use crate::application::dto::BookingReceipt;
use crate::domain::entities::{BookingDraft, DraftField};
use crate::domain::errors::ValidationError;

/// Submits the open booking draft.
///
/// Submission only acknowledges the request: the draft is cleared, the
/// history is left untouched and no overlap check is made.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubmitBookingUseCase;

impl SubmitBookingUseCase {
    /// Creates new booking use case.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Executes the submission and clears `draft` on success.
    ///
    /// # Errors
    /// Returns [`ValidationError::NoRoomSelected`] if no dialog is open, or
    /// [`ValidationError::EmptyField`] if date or times are blank. The draft
    /// is left unchanged on error.
    pub fn execute(&self, draft: &mut BookingDraft) -> Result<BookingReceipt, ValidationError> {
        let Some(room) = draft.selected_room() else {
            warn!("Booking submitted without a selected room");
            return Err(ValidationError::NoRoomSelected);
        };

        if !draft.can_submit() {
            warn!(room = %room.code(), "Booking form incomplete");
            return Err(ValidationError::EmptyField);
        }

        let receipt = BookingReceipt {
            room_code: room.code().to_string(),
            date: draft.field(DraftField::Date).to_string(),
            start_time: draft.field(DraftField::StartTime).to_string(),
            end_time: draft.field(DraftField::EndTime).to_string(),
        };

        info!(
            room = %receipt.room_code,
            date = %receipt.date,
            start = %receipt.start_time,
            end = %receipt.end_time,
            "Booking submitted"
        );

        draft.clear();
        Ok(receipt)
    }
}
