//! Compile-time room catalog and sample booking history.

use tracing::debug;

use super::home_content::HOME_SECTIONS;
use crate::domain::entities::{BookingHistoryEntry, BookingStatus, ContentSection, RoomDetail};
use crate::domain::ports::CatalogPort;

const ROOMS: &[(&str, &str)] = &[
    ("AJK", "Laboratorium Arsitektur Jaringan Komputer"),
    ("AULA", "Aula"),
    ("GIGa", "Laboratorium Grafika, Interaksi dan Game"),
    ("IF IUP", "Ruang Kelas IUP"),
    ("IF-101", "Ruang Kelas"),
    ("IF-102", "Ruang Kelas"),
    ("IF-103", "Ruang Kelas"),
    ("IF-104", "Ruang Kelas"),
    ("IF-105A", "Ruang Kelas"),
    ("IF-105B", "Ruang Kelas"),
    ("IF-106", "Ruang Kelas"),
    ("IF-107A", "Ruang Kelas"),
    ("IF-107B", "Ruang Kelas"),
    ("IF-108", "Ruang Kelas"),
    ("IF-109", "LAB PASCA BESAR"),
    ("IF-110", "LAB PASCA KECIL"),
    ("IF-111", "Pascasarjana"),
    ("IF-112", "Pascasarjana"),
    ("IF-113", "Ruang Kelas"),
    ("KCV", "Laboratorium Komputasi Cerdas Visi"),
    ("LP1", "Laboratorium Pemrograman 1"),
    ("LP2", "Laboratorium Pemrograman 2"),
    ("NCC", "Laboratorium Net-Centric Computing"),
    ("RS", "Ruang Sidang"),
    ("PKT", "Laboratorium Pemodelan Komputasi Terapan"),
    ("RAPAT1", "Ruang Rapat 1"),
    ("RAPAT2", "Ruang Rapat 2"),
    ("RPL", "Laboratorium Rekayasa Perangkat Lunak"),
    ("RTV", "Ruang TV"),
];

const SAMPLE_HISTORY: &[(&str, &str, &str, BookingStatus)] = &[
    (
        "10 Juni 2025",
        "18.00–20.00",
        "Ruang Kelas IF-104",
        BookingStatus::Pending,
    ),
    (
        "9 Juni 2025",
        "18.00–20.00",
        "Ruang Kelas IF-107",
        BookingStatus::Approved,
    ),
    (
        "9 Juni 2025",
        "18.00–20.00",
        "Ruang Kelas IF-103",
        BookingStatus::Rejected,
    ),
];

/// Catalog backed by the department's fixed room list.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    rooms: Vec<RoomDetail>,
    history: Vec<BookingHistoryEntry>,
}

impl StaticCatalog {
    /// Builds the catalog.
    #[must_use]
    pub fn new() -> Self {
        let rooms: Vec<RoomDetail> = ROOMS
            .iter()
            .map(|(code, name)| RoomDetail::new(*code, *name))
            .collect();
        let history = SAMPLE_HISTORY
            .iter()
            .map(|&(date, time, room, status)| BookingHistoryEntry::new(date, time, room, status))
            .collect();

        debug!(rooms = rooms.len(), "Static catalog loaded");

        Self { rooms, history }
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogPort for StaticCatalog {
    fn rooms(&self) -> &[RoomDetail] {
        &self.rooms
    }

    fn booking_history(&self) -> &[BookingHistoryEntry] {
        &self.history
    }

    fn home_sections(&self) -> &[ContentSection] {
        HOME_SECTIONS
    }
}
