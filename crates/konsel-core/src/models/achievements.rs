//! Gamification: achievements, points, and levels.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Points needed to reach each level; index `n` is the floor of level `n + 1`.
pub const LEVEL_THRESHOLDS: [u32; 5] = [0, 200, 500, 1000, 2000];

pub const MAX_LEVEL: u32 = LEVEL_THRESHOLDS.len() as u32;

/// Counters an achievement can be earned from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserStats {
    pub chat_sessions: u32,
    pub articles_read: u32,
    pub journal_entries: u32,
    pub days_streak: u32,
    pub relaxation_sessions: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    ChatSessions(u32),
    ArticlesRead(u32),
    JournalEntries(u32),
    DaysStreak(u32),
    RelaxationSessions(u32),
}

impl Requirement {
    pub fn is_met(self, stats: &UserStats) -> bool {
        match self {
            Self::ChatSessions(n) => stats.chat_sessions >= n,
            Self::ArticlesRead(n) => stats.articles_read >= n,
            Self::JournalEntries(n) => stats.journal_entries >= n,
            Self::DaysStreak(n) => stats.days_streak >= n,
            Self::RelaxationSessions(n) => stats.relaxation_sessions >= n,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub points: u32,
    pub requirement: Requirement,
}

pub const ACHIEVEMENTS: [Achievement; 6] = [
    Achievement {
        id: 1,
        title: "Langkah Pertama",
        description: "Menyelesaikan sesi konseling pertama",
        icon: "🎯",
        points: 50,
        requirement: Requirement::ChatSessions(1),
    },
    Achievement {
        id: 2,
        title: "Penjelajah Pengetahuan",
        description: "Membaca 10 artikel kesehatan mental",
        icon: "📚",
        points: 100,
        requirement: Requirement::ArticlesRead(10),
    },
    Achievement {
        id: 3,
        title: "Konsisten",
        description: "Aktif selama 7 hari berturut-turut",
        icon: "🔥",
        points: 150,
        requirement: Requirement::DaysStreak(7),
    },
    Achievement {
        id: 4,
        title: "Jurnal Master",
        description: "Menulis 10 entri jurnal emosi",
        icon: "✍️",
        points: 100,
        requirement: Requirement::JournalEntries(10),
    },
    Achievement {
        id: 5,
        title: "Motivator Diri",
        description: "Menyelesaikan 20 sesi konseling",
        icon: "💪",
        points: 200,
        requirement: Requirement::ChatSessions(20),
    },
    Achievement {
        id: 6,
        title: "Zen Master",
        description: "Melakukan latihan relaksasi 15 kali",
        icon: "🧘",
        points: 120,
        requirement: Requirement::RelaxationSessions(15),
    },
];

/// Achievements split by whether `stats` earns them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub unlocked: Vec<Achievement>,
    pub locked: Vec<Achievement>,
    pub total_points: u32,
    pub level: u32,
    pub points_to_next_level: u32,
}

pub fn progress(stats: &UserStats) -> Progress {
    let (unlocked, locked): (Vec<_>, Vec<_>) = ACHIEVEMENTS
        .into_iter()
        .partition(|a| a.requirement.is_met(stats));
    let total_points = unlocked.iter().map(|a| a.points).sum();

    Progress {
        unlocked,
        locked,
        total_points,
        level: level(total_points),
        points_to_next_level: points_to_next_level(total_points),
    }
}

/// Level 1–5 for a point total.
pub fn level(points: u32) -> u32 {
    LEVEL_THRESHOLDS.iter().filter(|&&t| points >= t).count() as u32
}

/// Points still needed for the next level; 0 at the top level.
pub fn points_to_next_level(points: u32) -> u32 {
    let level = level(points);
    match LEVEL_THRESHOLDS.get(level as usize) {
        Some(&next) => next - points,
        None => 0,
    }
}

/// Consecutive days with activity, counting back from `today`. Zero when
/// `today` itself has no activity.
pub fn day_streak(active_days: &BTreeSet<jiff::civil::Date>, today: jiff::civil::Date) -> u32 {
    let mut streak = 0;
    let mut day = today;
    while active_days.contains(&day) {
        streak += 1;
        day = match day.yesterday() {
            Ok(d) => d,
            Err(_) => break,
        };
    }
    streak
}
