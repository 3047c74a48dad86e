use serde::Serialize;

/// A paid counseling package, offered once the free trial ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CounselingPackage {
    pub id: &'static str,
    pub name: &'static str,
    /// Price in rupiah.
    pub price_idr: u32,
    pub duration_days: u32,
    pub sessions: u32,
    pub popular: bool,
    pub features: &'static [&'static str],
}

impl CounselingPackage {
    /// Price formatted the Indonesian way, e.g. "Rp 150.000".
    pub fn price_label(&self) -> String {
        let digits = self.price_idr.to_string();
        let mut grouped = String::new();
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }
        format!("Rp {grouped}")
    }
}

pub static PACKAGES: [CounselingPackage; 3] = [
    CounselingPackage {
        id: "basic",
        name: "Paket Basic",
        price_idr: 150_000,
        duration_days: 7,
        sessions: 3,
        popular: false,
        features: &[
            "3 sesi konseling (45 menit/sesi)",
            "Chat support 24/7",
            "Akses materi edukasi",
            "Jurnal emosi digital",
        ],
    },
    CounselingPackage {
        id: "premium",
        name: "Paket Premium",
        price_idr: 350_000,
        duration_days: 30,
        sessions: 8,
        popular: true,
        features: &[
            "8 sesi konseling (45 menit/sesi)",
            "Chat support 24/7",
            "Akses materi edukasi premium",
            "Jurnal emosi digital",
            "Video call konseling",
            "Psikotes & assessment",
        ],
    },
    CounselingPackage {
        id: "ultimate",
        name: "Paket Ultimate",
        price_idr: 650_000,
        duration_days: 60,
        sessions: 15,
        popular: false,
        features: &[
            "15 sesi konseling (45 menit/sesi)",
            "Chat support 24/7",
            "Akses semua materi premium",
            "Jurnal emosi digital",
            "Video call konseling",
            "Psikotes & assessment lengkap",
            "Konsultasi keluarga (2 sesi)",
            "Progress report bulanan",
        ],
    },
];

pub fn find(id: &str) -> Option<&'static CounselingPackage> {
    PACKAGES.iter().find(|p| p.id == id)
}
