//! Domain layer with core booking entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Screen and tab navigation.
pub mod navigation;
/// Toast notifications.
pub mod notification;
/// Port definitions.
pub mod ports;

pub use entities::{BookingDraft, RoomDetail, UserProfile};
pub use errors::ValidationError;
pub use navigation::{NavEvent, Screen, Tab};
pub use notification::{Notification, NotificationLevel};
pub use ports::CatalogPort;
