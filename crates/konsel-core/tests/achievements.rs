use std::collections::BTreeSet;

use jiff::civil::{Date, date};
use konsel_core::models::achievements::{
    self, MAX_LEVEL, UserStats, day_streak, level, points_to_next_level,
};

#[test]
fn level_thresholds() {
    assert_eq!(level(0), 1);
    assert_eq!(level(199), 1);
    assert_eq!(level(200), 2);
    assert_eq!(level(499), 2);
    assert_eq!(level(500), 3);
    assert_eq!(level(1000), 4);
    assert_eq!(level(2000), MAX_LEVEL);
    assert_eq!(level(u32::MAX), MAX_LEVEL);
}

#[test]
fn points_to_next_level_counts_down() {
    assert_eq!(points_to_next_level(0), 200);
    assert_eq!(points_to_next_level(150), 50);
    assert_eq!(points_to_next_level(200), 300);
    assert_eq!(points_to_next_level(1999), 1);
    assert_eq!(points_to_next_level(2000), 0);
    assert_eq!(points_to_next_level(5000), 0);
}

#[test]
fn fresh_account_has_everything_locked() {
    let progress = achievements::progress(&UserStats::default());
    assert!(progress.unlocked.is_empty());
    assert_eq!(progress.locked.len(), achievements::ACHIEVEMENTS.len());
    assert_eq!(progress.total_points, 0);
    assert_eq!(progress.level, 1);
    assert_eq!(progress.points_to_next_level, 200);
}

#[test]
fn unlocked_points_add_up() {
    let stats = UserStats {
        chat_sessions: 1,
        journal_entries: 10,
        days_streak: 7,
        ..UserStats::default()
    };
    let progress = achievements::progress(&stats);

    let ids: Vec<u32> = progress.unlocked.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![1, 3, 4]);
    assert_eq!(progress.total_points, 50 + 150 + 100);
    assert_eq!(progress.level, 2);
    assert_eq!(progress.points_to_next_level, 200);
}

#[test]
fn everything_unlocked() {
    let stats = UserStats {
        chat_sessions: 20,
        articles_read: 10,
        journal_entries: 10,
        days_streak: 7,
        relaxation_sessions: 15,
    };
    let progress = achievements::progress(&stats);
    assert!(progress.locked.is_empty());
    assert_eq!(progress.total_points, 720);
    assert_eq!(progress.level, 3);
    assert_eq!(progress.points_to_next_level, 280);
}

fn days(list: &[Date]) -> BTreeSet<Date> {
    list.iter().copied().collect()
}

#[test]
fn streak_counts_back_from_today() {
    let today = date(2026, 10, 18);
    let active = days(&[
        date(2026, 10, 18),
        date(2026, 10, 17),
        date(2026, 10, 16),
        date(2026, 10, 14),
    ]);
    assert_eq!(day_streak(&active, today), 3);
}

#[test]
fn streak_crosses_month_boundary() {
    let active = days(&[date(2026, 10, 1), date(2026, 9, 30), date(2026, 9, 29)]);
    assert_eq!(day_streak(&active, date(2026, 10, 1)), 3);
}

#[test]
fn no_activity_today_breaks_streak() {
    let active = days(&[date(2026, 10, 17), date(2026, 10, 16)]);
    assert_eq!(day_streak(&active, date(2026, 10, 18)), 0);
}
