//! Application layer with use cases, services and DTOs.

/// Data transfer objects.
pub mod dto;
/// Navigation, section and toast services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{AuthMethod, AuthResponse, BookingReceipt, LoginRequest, RegisterRequest};
pub use use_cases::{LoginUseCase, RegisterUseCase, SubmitBookingUseCase};
