//! Domain entities.

mod booking;
mod content;
mod credentials;
mod profile;
mod room;

pub use booking::{BookingDraft, BookingHistoryEntry, BookingStatus, DraftField};
pub use content::{ContentBlock, ContentSection, ListItem, SectionId};
pub use credentials::{LoginCredentials, RegisterCredentials};
pub use profile::UserProfile;
pub use room::{DEFAULT_PHONE, DEFAULT_TECHNICIAN, RoomDetail};
