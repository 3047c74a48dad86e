//! Static self-help content: educational articles and relaxation tracks.
//! Media playback is left to the front-end; only the catalogue lives here.

use serde::Serialize;

/// Category filter value meaning "no filter".
pub const ALL: &str = "Semua";

pub const ARTICLE_CATEGORIES: [&str; 6] = [ALL, "Stres", "Kecemasan", "Motivasi", "Relaksasi", "Hubungan"];

pub const TRACK_CATEGORIES: [&str; 4] = [ALL, "Alam", "Guided", "Musik"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Advanced,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Mudah",
            Self::Medium => "Sedang",
            Self::Advanced => "Lanjut",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Article {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub minutes: u32,
    pub difficulty: Difficulty,
    pub description: &'static str,
    pub content: &'static str,
    pub rating: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RelaxationTrack {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub duration_secs: u32,
    pub category: &'static str,
}

impl RelaxationTrack {
    /// "mm:ss".
    pub fn duration_label(&self) -> String {
        format!("{}:{:02}", self.duration_secs / 60, self.duration_secs % 60)
    }
}

pub static ARTICLES: [Article; 6] = [
    Article {
        id: 1,
        title: "Teknik Pernapasan 5 Menit untuk Mengatasi Kecemasan",
        category: "Kecemasan",
        minutes: 5,
        difficulty: Difficulty::Easy,
        description: "Pelajari teknik pernapasan sederhana yang dapat membantu menenangkan pikiran \
                      dalam situasi cemas.",
        content: "Teknik pernapasan 4-7-8 adalah salah satu cara paling efektif untuk mengatasi \
                  kecemasan...",
        rating: 4.8,
    },
    Article {
        id: 2,
        title: "Memahami dan Mengelola Stres Akademik",
        category: "Stres",
        minutes: 10,
        difficulty: Difficulty::Medium,
        description: "Tips praktis untuk mengatasi tekanan sekolah dan tugas yang menumpuk.",
        content: "Stres akademik adalah hal yang wajar dialami setiap pelajar...",
        rating: 4.6,
    },
    Article {
        id: 3,
        title: "Meditasi Mindfulness untuk Pemula",
        category: "Relaksasi",
        minutes: 15,
        difficulty: Difficulty::Easy,
        description: "Panduan langkah demi langkah untuk memulai praktik mindfulness.",
        content: "Mindfulness adalah praktik kesadaran penuh terhadap momen saat ini...",
        rating: 4.9,
    },
    Article {
        id: 4,
        title: "Membangun Rasa Percaya Diri",
        category: "Motivasi",
        minutes: 12,
        difficulty: Difficulty::Medium,
        description: "Strategi untuk meningkatkan kepercayaan diri dan self-esteem.",
        content: "Kepercayaan diri adalah fondasi penting untuk kesuksesan...",
        rating: 4.7,
    },
    Article {
        id: 5,
        title: "Mengatasi Konflik dalam Pertemanan",
        category: "Hubungan",
        minutes: 8,
        difficulty: Difficulty::Medium,
        description: "Cara sehat untuk menyelesaikan masalah dengan teman.",
        content: "Konflik dalam pertemanan adalah hal yang normal...",
        rating: 4.5,
    },
    Article {
        id: 6,
        title: "Latihan Gratitude untuk Mood yang Lebih Baik",
        category: "Motivasi",
        minutes: 6,
        difficulty: Difficulty::Easy,
        description: "Praktik sederhana untuk meningkatkan kebahagiaan sehari-hari.",
        content: "Gratitude atau rasa syukur adalah salah satu cara paling efektif...",
        rating: 4.8,
    },
];

pub static TRACKS: [RelaxationTrack; 6] = [
    RelaxationTrack {
        id: 1,
        title: "Suara Hujan Tenang",
        description: "Suara hujan gerimis yang menenangkan untuk relaksasi",
        duration_secs: 600,
        category: "Alam",
    },
    RelaxationTrack {
        id: 2,
        title: "Gelombang Laut",
        description: "Suara ombak pantai yang damai",
        duration_secs: 900,
        category: "Alam",
    },
    RelaxationTrack {
        id: 3,
        title: "Hutan Tropis",
        description: "Kicauan burung dan suara dedaunan",
        duration_secs: 720,
        category: "Alam",
    },
    RelaxationTrack {
        id: 4,
        title: "Meditasi Pernapasan",
        description: "Panduan latihan pernapasan 4-7-8",
        duration_secs: 480,
        category: "Guided",
    },
    RelaxationTrack {
        id: 5,
        title: "Progressive Muscle Relaxation",
        description: "Relaksasi otot dari ujung kaki hingga kepala",
        duration_secs: 1200,
        category: "Guided",
    },
    RelaxationTrack {
        id: 6,
        title: "Musik Piano Lembut",
        description: "Melodi piano klasik yang menenangkan",
        duration_secs: 1080,
        category: "Musik",
    },
];

/// Articles in `category`, or all of them for [`ALL`]. Exact match.
pub fn articles_in(category: &str) -> Vec<&'static Article> {
    ARTICLES
        .iter()
        .filter(|a| category == ALL || a.category == category)
        .collect()
}

pub fn article(id: u32) -> Option<&'static Article> {
    ARTICLES.iter().find(|a| a.id == id)
}

/// Tracks in `category`, or all of them for [`ALL`]. Exact match.
pub fn tracks_in(category: &str) -> Vec<&'static RelaxationTrack> {
    TRACKS
        .iter()
        .filter(|t| category == ALL || t.category == category)
        .collect()
}

pub fn track(id: u32) -> Option<&'static RelaxationTrack> {
    TRACKS.iter().find(|t| t.id == id)
}
