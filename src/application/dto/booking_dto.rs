//! Booking DTOs.

/// Confirmation of a submitted booking draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingReceipt {
    /// Code of the booked room.
    pub room_code: String,
    /// Entered date.
    pub date: String,
    /// Entered start time.
    pub start_time: String,
    /// Entered end time.
    pub end_time: String,
}

impl BookingReceipt {
    /// Returns the confirmation shown to the user.
    #[must_use]
    pub fn message(&self) -> String {
        format!("Booking submitted for {}", self.room_code)
    }
}
