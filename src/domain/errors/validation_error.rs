//! Form validation error types.

use thiserror::Error;

/// Form validation failures. The display text is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is empty.
    #[error("Please fill all fields")]
    EmptyField,

    /// Password and confirmation differ.
    #[error("Passwords don't match!")]
    PasswordMismatch,

    /// Booking submitted without an open room dialog.
    #[error("No room selected")]
    NoRoomSelected,
}
