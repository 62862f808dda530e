//! Data transfer objects for the application layer.

mod auth_dto;
mod booking_dto;

pub use auth_dto::{AuthMethod, AuthResponse, LoginRequest, RegisterRequest};
pub use booking_dto::BookingReceipt;
