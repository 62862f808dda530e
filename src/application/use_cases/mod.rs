//! Use case implementations.

mod login_use_case;
mod register_use_case;
mod submit_booking_use_case;

pub use login_use_case::LoginUseCase;
pub use register_use_case::RegisterUseCase;
pub use submit_booking_use_case::SubmitBookingUseCase;
