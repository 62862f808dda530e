//! Borrowing rules and facilities shown on the home tab.

use crate::domain::entities::{ContentBlock, ContentSection, ListItem, SectionId};

const ROOM_RESPONSIBLES: &[&str] = &[
    "• Ruang Kelas - Kunto Hermono",
    "• Ruang Aula - Jumali",
    "• Lab Pemrograman 1 - Junaidy Abdillah",
    "• Lab Pemrograman 2 - Edy Lukito",
];

const REGULATIONS: &[ListItem] = &[
    ListItem::plain("Pastikan tanggal peminjaman tidak bertabrakan dengan acara lain."),
    ListItem::plain(
        "Peminjam mengajukan permohonan peminjaman ruangan kepada Kepala Departemen Informatika ITS.",
    ),
    ListItem::plain(
        "Persetujuan reservasi oleh Kepala Departemen berkoordinasi dengan Penanggung Jawab Ruangan didasarkan atas skala prioritas dan potensi gangguan (keamanan, kebisingan) dengan kegiatan waktu yang sama.",
    ),
    ListItem::nested(
        "Setelah semua proses peminjaman ruangan disetujui, peminjam menghubungi Penanggung Jawab Ruangan untuk mendapatkan kunci:",
        ROOM_RESPONSIBLES,
    ),
    ListItem::plain("Informasi dan jadwal setiap ruangan dapat dilihat di laman ruangan."),
];

const DAMAGE_SANCTIONS: &[&str] = &[
    "a. Memperbaiki alat tersebut apabila kerusakan tersebut dapat diperbaiki.",
    "b. Mengganti dengan alat yang baru apabila kerusakan tersebut tidak bisa diperbaiki.",
];

const CONDUCT_RULES: &[ListItem] = &[
    ListItem::plain(
        "Penggunaan ruangan harus mendapat persetujuan dari Kepala Departemen Informatika ITS.",
    ),
    ListItem::plain("Pengajuan peminjaman maksimal 2 minggu sebelum pelaksanaan kegiatan."),
    ListItem::plain(
        "Penggunaan ruang hanya diperbolehkan pada rentang waktu jam kerja (08:00 -18:00) di hari kerja, dan maksimal pukul 16:00 untuk hari Sabtu dan Minggu.",
    ),
    ListItem::plain(
        "Pengguna atau Peminjam hanya dikhususkan untuk civitas akademika Jurusan Teknik Informatika ITS.",
    ),
    ListItem::plain(
        "Pengguna ruang wajib melakukan pemeriksaan kondisi barang yang akan digunakan sebelum maupun sesudah digunakan untuk memastikan keadaan kondisi barang dalam keadaan baik.",
    ),
    ListItem::plain("Tidak dibenarkan meninggalkan ruang dalam keadaan kosong dan tidak terkunci."),
    ListItem::nested(
        "Jika terjadi kerusakan inventaris ruang karena kelalaian/kecerobohan pemakaian maka yang bersangkutan diberi sanksi untuk:",
        DAMAGE_SANCTIONS,
    ),
];

const AULA_RULES: &[ListItem] = &[
    ListItem::plain(
        "Peserta kegiatan minimal 75 orang. Jika pada waktu pelaksanaan kegiatan peserta yang hadir kurang dari 75 orang, maka kegiatan tersebut harus bersedia dipindahkan di ruangan lain.",
    ),
    ListItem::plain("Dilarang masuk ke dalam ruang operator."),
    ListItem::plain("Dilarang melipat/memindahkan kursi tanpa seijin petugas aula."),
    ListItem::plain("Dilarang membawa kunci aula."),
    ListItem::plain(
        "Setelah acara/kegiatan selesai, peminjam/pemakai diwajibkan untuk segera menghubungi petugas aula.",
    ),
    ListItem::plain(
        "Dilarang membuang sampah/meninggalkan bekas makanan dan minuman di dalam ruang aula.",
    ),
];

const NETWORK: &str = "Terhubung dengan Gygabytes INTRAnet ITS, dan INTERnet up to 7 GB (Shared with integra authentication)";
const WIFI: &str = "Wifi dual band 2.4 GHz dan 5 Ghz";
const DESKTOP: &str = "Desktop PC (Processor i5, RAM 8GB, HDD 1TB)";

const AULA_FACILITIES: &[&str] = &[
    "Kapasitas kursi 200 orang",
    NETWORK,
    WIFI,
    "Proyektor",
    "Audio System Supported",
];

const CLASSROOM_FACILITIES: &[&str] = &["Kapasitas kursi 40 orang", NETWORK, WIFI, "Proyektor"];

const LAB1_FACILITIES: &[&str] = &[
    "Kapasitas kursi 75 orang",
    NETWORK,
    WIFI,
    DESKTOP,
    "Proyektor",
    "Audio System Supported",
];

const LAB2_FACILITIES: &[&str] = &[
    "Kapasitas kursi 54 orang",
    NETWORK,
    WIFI,
    DESKTOP,
    "Proyektor",
    "Audio System Supported",
];

pub(super) const HOME_SECTIONS: &[ContentSection] = &[
    ContentSection {
        id: SectionId::Regulations,
        title: "Ketentuan Peminjaman",
        blocks: &[ContentBlock::Numbered(REGULATIONS)],
    },
    ContentSection {
        id: SectionId::FlowDiagram,
        title: "Diagram Alur Peminjaman",
        blocks: &[ContentBlock::Image {
            asset: "sop",
            caption: "Diagram Alur Peminjaman",
        }],
    },
    ContentSection {
        id: SectionId::ConductRules,
        title: "Tata Tertib",
        blocks: &[ContentBlock::Numbered(CONDUCT_RULES)],
    },
    ContentSection {
        id: SectionId::AdditionalRules,
        title: "Peraturan Tambahan",
        blocks: &[
            ContentBlock::Heading("AULA"),
            ContentBlock::Numbered(AULA_RULES),
        ],
    },
    ContentSection {
        id: SectionId::Facilities,
        title: "Fasilitas",
        blocks: &[
            ContentBlock::Heading("AULA"),
            ContentBlock::Bullets(AULA_FACILITIES),
            ContentBlock::Heading("RUANG KELAS"),
            ContentBlock::Bullets(CLASSROOM_FACILITIES),
            ContentBlock::Heading("LAB. PEMROGRAMAN 1"),
            ContentBlock::Bullets(LAB1_FACILITIES),
            ContentBlock::Heading("LAB. PEMROGRAMAN 2"),
            ContentBlock::Bullets(LAB2_FACILITIES),
        ],
    },
];
