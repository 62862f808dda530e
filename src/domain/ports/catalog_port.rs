//! Static content provider port.

use crate::domain::entities::{BookingHistoryEntry, ContentSection, RoomDetail};

/// Read-only source of rooms, sample history and home content.
pub trait CatalogPort: Send + Sync {
    /// Bookable rooms in display order.
    fn rooms(&self) -> &[RoomDetail];

    /// Booking history shown on the history tab.
    fn booking_history(&self) -> &[BookingHistoryEntry];

    /// Expandable sections shown on the home tab.
    fn home_sections(&self) -> &[ContentSection];
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use crate::domain::entities::{BookingStatus, ContentBlock, SectionId};

    const SECTIONS: &[ContentSection] = &[
        ContentSection {
            id: SectionId::Regulations,
            title: "Regulations",
            blocks: &[ContentBlock::Bullets(&["Book ahead"])],
        },
        ContentSection {
            id: SectionId::Facilities,
            title: "Facilities",
            blocks: &[ContentBlock::Heading("AULA")],
        },
    ];

    /// Small in-memory catalog for testing.
    pub struct MockCatalog {
        rooms: Vec<RoomDetail>,
        history: Vec<BookingHistoryEntry>,
    }

    impl MockCatalog {
        /// Creates a catalog with three rooms and one history entry.
        pub fn new() -> Self {
            Self {
                rooms: vec![
                    RoomDetail::new("IF-101", "Ruang Kelas"),
                    RoomDetail::new("IF-104", "Ruang Kelas"),
                    RoomDetail::new("LP1", "Laboratorium Pemrograman 1"),
                ],
                history: vec![BookingHistoryEntry::new(
                    "10 Juni 2025",
                    "18.00–20.00",
                    "Ruang Kelas IF-104",
                    BookingStatus::Pending,
                )],
            }
        }
    }

    impl CatalogPort for MockCatalog {
        fn rooms(&self) -> &[RoomDetail] {
            &self.rooms
        }

        fn booking_history(&self) -> &[BookingHistoryEntry] {
            &self.history
        }

        fn home_sections(&self) -> &[ContentSection] {
            SECTIONS
        }
    }
}
